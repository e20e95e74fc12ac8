//! Todo List Component
//!
//! Count line plus one row per todo, newest first.

use leptos::prelude::*;

use crate::components::TodoListItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="todo-list">
            <p class="todo-count">{move || format!("Todos: {}", store.todos().read().len())}</p>
            <ul>
                <For
                    each=move || store.todos().read().list().to_vec()
                    // Rows are snapshots, so a toggle must produce a new key
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoListItem todo=todo /> }
                />
            </ul>
        </nav>
    }
}
