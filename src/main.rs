#![allow(warnings)]
//! To-Do Frontend Entry Point

mod platform;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
