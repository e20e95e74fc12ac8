//! Notice Bar Component
//!
//! Snackbar for the current notice. Hidden when the notice is closed.

use leptos::prelude::*;

use crate::store::{store_close_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    let notice_class = move || {
        let notice = store.notice().read();
        format!(
            "notice notice-{} notice-{}",
            notice.severity.as_str(),
            notice.variant.as_str()
        )
    };

    view! {
        <Show when=move || store.notice().read().open>
            <div class=notice_class>
                <span class="notice-message">{move || store.notice().read().message.clone()}</span>
                <button class="notice-close" title="Close" on:click=move |_| store_close_notice(&store)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
