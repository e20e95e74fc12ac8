//! To-Do Frontend App
//!
//! Single page: app bar, notice, add form, list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AppBar, NewTodoForm, NoticeBar, TodoList};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Rehydrates from localStorage before the first render
    let state = AppState::load();
    log::info!("Loaded {} todos", state.todos.len());
    provide_context(Store::new(state));

    view! {
        <AppBar />
        <NoticeBar />
        <main class="main-content">
            <NewTodoForm />
            <TodoList />
        </main>
    }
}
