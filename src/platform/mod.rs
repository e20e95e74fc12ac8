//! Browser Bindings
//!
//! Implementations of the core seams on top of `web_sys`.

mod dialog;
mod storage;

pub use dialog::BrowserPrompt;
pub use storage::BrowserStorage;
