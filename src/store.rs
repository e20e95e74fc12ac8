//! Application State Store
//!
//! Uses Leptos reactive_stores so components re-render when the todo
//! collection or the notice changes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_core::{
    confirm_delete, delete_confirmed, submit_new_todo, toggle_todo, Notice, NoticeConfig,
    NoticeTicket, SubmitOutcome, SystemClock, TodoStore,
};

use crate::platform::{BrowserPrompt, BrowserStorage};

pub type BrowserTodoStore = TodoStore<BrowserStorage, SystemClock>;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Todos, newest first, mirrored to localStorage
    pub todos: BrowserTodoStore,
    /// Feedback after add/delete
    pub notice: Notice,
}

impl AppState {
    /// Build the state and rehydrate todos from localStorage
    pub fn load() -> Self {
        let mut todos = TodoStore::new(BrowserStorage, SystemClock);
        todos.initialize();
        Self {
            todos,
            notice: Notice::new(NoticeConfig::default()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Submit the add form. Starts the notice timer on success.
pub fn store_submit_todo(store: &AppStore, raw: &str) -> SubmitOutcome {
    let outcome = {
        let mut state = store.write();
        let AppState { todos, notice } = &mut *state;
        submit_new_todo(todos, &BrowserPrompt, notice, raw)
    };
    if let SubmitOutcome::Added { ticket, .. } = outcome {
        schedule_auto_hide(*store, ticket);
    }
    outcome
}

/// Flip completion on one todo
pub fn store_toggle_todo(store: &AppStore, id: u32) {
    let todos = store.todos();
    toggle_todo(&mut *todos.write(), id);
}

/// Ask for confirmation, then delete. Returns whether the todo was deleted.
pub fn store_delete_todo(store: &AppStore, id: u32) -> bool {
    // Declining must not notify subscribers, so ask before writing
    if !confirm_delete(&BrowserPrompt, id) {
        return false;
    }
    let ticket = {
        let mut state = store.write();
        let AppState { todos, notice } = &mut *state;
        delete_confirmed(todos, notice, id)
    };
    schedule_auto_hide(*store, ticket);
    true
}

/// Hide the notice now
pub fn store_close_notice(store: &AppStore) {
    store.notice().write().close();
}

fn schedule_auto_hide(store: AppStore, ticket: NoticeTicket) {
    let delay_ms = store.notice().with_untracked(|n| n.auto_hide_ms);
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        store.notice().write().expire(ticket);
    });
}
