//! App Bar Component
//!
//! Fixed header with menu glyph, logo link and write label.

use leptos::prelude::*;

#[component]
pub fn AppBar() -> impl IntoView {
    view! {
        <header class="app-bar">
            <div class="app-bar-side">
                <span class="menu-icon">"☰"</span>
            </div>
            <div class="logo-box">
                <a href="/" class="logo">"Logo"</a>
            </div>
            <div class="app-bar-side end">"Write"</div>
        </header>
        // Keeps content below the fixed header
        <div class="app-bar-spacer"></div>
    }
}
