//! New Todo Form Component
//!
//! Multiline input plus submit button. Blank input is rejected with an
//! alert; either way focus returns to the input.

use leptos::html::Textarea;
use leptos::prelude::*;
use todo_core::SubmitOutcome;

use crate::store::{store_submit_todo, use_app_store};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (content, set_content) = signal(String::new());
    let input_ref = NodeRef::<Textarea>::new();

    let focus_input = move || {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = content.get_untracked();
        match store_submit_todo(&store, &raw) {
            SubmitOutcome::Added { id, .. } => {
                log::debug!("Form added todo {}", id);
                set_content.set(String::new());
            }
            // Input was whitespace only; show it trimmed
            SubmitOutcome::Rejected => set_content.set(raw.trim().to_string()),
        }
        focus_input();
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <textarea
                name="content"
                rows="4"
                placeholder="Enter a to-do"
                node_ref=input_ref
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <button class="submit-btn" type="submit">"Add"</button>
        </form>
    }
}
