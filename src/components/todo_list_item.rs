//! Todo List Item Component
//!
//! Id and date chips, completion toggle, content and delete button.

use leptos::prelude::*;
use todo_core::TodoRecord;

use crate::store::{store_delete_todo, store_toggle_todo, use_app_store};

/// A single todo row
#[component]
pub fn TodoListItem(todo: TodoRecord) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class="todo-item">
            <div class="todo-chips">
                <span class="chip">{format!("No. {}", id)}</span>
                <span class="chip primary">{format!("Date: {}", todo.registered_at)}</span>
            </div>
            <div class=if completed { "todo-body completed" } else { "todo-body" }>
                <button class="check-btn" title="Toggle completion" on:click=move |_| store_toggle_todo(&store, id)>
                    <span class=if completed { "check-icon done" } else { "check-icon" }>"✔"</span>
                </button>
                <div class="todo-divider"></div>
                <div class="todo-content">"To do: " {todo.content}</div>
                <button
                    class="delete-btn"
                    on:click=move |_| {
                        store_delete_todo(&store, id);
                    }
                >
                    "Delete 🗑"
                </button>
            </div>
        </li>
    }
}
