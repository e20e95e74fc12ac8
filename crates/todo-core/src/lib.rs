//! To-Do Core
//!
//! Layered the same way as the app:
//! - model / error / config: plain data
//! - storage / clock / prompt: seams the browser binds at runtime
//! - store: the single owner of the to-do collection
//! - notice / actions: what the input and list surfaces do on each event

mod actions;
mod clock;
mod config;
mod error;
mod model;
mod notice;
mod prompt;
mod storage;
mod store;

pub use actions::{
    confirm_delete, delete_confirmed, delete_todo, submit_new_todo, toggle_todo, SubmitOutcome,
    EMPTY_CONTENT_ALERT,
};
pub use clock::{Clock, SystemClock, TIMESTAMP_FORMAT};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use config::{NoticeConfig, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use model::TodoRecord;
pub use notice::{Notice, NoticeTicket, Severity, Variant};
pub use prompt::UserPrompt;
#[cfg(any(test, feature = "testing"))]
pub use prompt::ScriptedPrompt;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TodoStore;
