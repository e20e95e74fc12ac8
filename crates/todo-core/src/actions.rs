//! Surface Actions
//!
//! What the add form and the list do in response to a user event.
//! Components call these and only handle focus and timers themselves.

use crate::clock::Clock;
use crate::error::StoreError;
use crate::notice::{Notice, NoticeTicket, Severity};
use crate::prompt::UserPrompt;
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;

pub const EMPTY_CONTENT_ALERT: &str = "Please enter a to-do.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the form should clear and refocus, the notice timer should start
    Added { id: u32, ticket: NoticeTicket },
    /// Blank input; the form should keep its text and refocus
    Rejected,
}

/// Handle add-form submission
pub fn submit_new_todo<S, C, P>(
    store: &mut TodoStore<S, C>,
    prompt: &P,
    notice: &mut Notice,
    raw: &str,
) -> SubmitOutcome
where
    S: KeyValueStorage,
    C: Clock,
    P: UserPrompt + ?Sized,
{
    let content = raw.trim();
    if content.is_empty() {
        prompt.alert(EMPTY_CONTENT_ALERT);
        return SubmitOutcome::Rejected;
    }

    match store.add(content) {
        Ok(id) => {
            let ticket = notice.show_default(format!("Todo #{} added", id), Severity::Success);
            SubmitOutcome::Added { id, ticket }
        }
        Err(StoreError::EmptyContent) => {
            prompt.alert(EMPTY_CONTENT_ALERT);
            SubmitOutcome::Rejected
        }
        Err(e) => {
            log::warn!("Add rejected: {}", e);
            prompt.alert(&e.to_string());
            SubmitOutcome::Rejected
        }
    }
}

/// Handle the completion control. No confirmation.
pub fn toggle_todo<S: KeyValueStorage, C: Clock>(store: &mut TodoStore<S, C>, id: u32) -> Option<bool> {
    store.toggle_completion(id)
}

/// Ask before deleting. Touches no state.
pub fn confirm_delete<P: UserPrompt + ?Sized>(prompt: &P, id: u32) -> bool {
    prompt.confirm(&format!("Delete todo #{}?", id))
}

/// Remove a todo the user already agreed to delete
pub fn delete_confirmed<S: KeyValueStorage, C: Clock>(
    store: &mut TodoStore<S, C>,
    notice: &mut Notice,
    id: u32,
) -> NoticeTicket {
    store.remove(id);
    notice.show_default(format!("Todo #{} deleted", id), Severity::Error)
}

/// Handle the delete control. Returns the notice ticket when the user
/// confirmed and the todo was removed.
pub fn delete_todo<S, C, P>(
    store: &mut TodoStore<S, C>,
    prompt: &P,
    notice: &mut Notice,
    id: u32,
) -> Option<NoticeTicket>
where
    S: KeyValueStorage,
    C: Clock,
    P: UserPrompt + ?Sized,
{
    if !confirm_delete(prompt, id) {
        return None;
    }
    Some(delete_confirmed(store, notice, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::config::NoticeConfig;
    use crate::prompt::ScriptedPrompt;
    use crate::storage::{KeyValueStorage, MemoryStorage};

    fn setup() -> (TodoStore<MemoryStorage, SystemClock>, Notice) {
        (
            TodoStore::new(MemoryStorage::new(), SystemClock),
            Notice::new(NoticeConfig::default()),
        )
    }

    #[test]
    fn test_blank_submit_alerts() {
        let (mut store, mut notice) = setup();
        let prompt = ScriptedPrompt::new();
        let outcome = submit_new_todo(&mut store, &prompt, &mut notice, "   \n ");
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(prompt.alerts(), vec![EMPTY_CONTENT_ALERT.to_string()]);
        assert!(store.is_empty());
        assert_eq!(store.last_id(), 0);
        assert!(!notice.open);
    }

    #[test]
    fn test_submit_shows_success() {
        let (mut store, mut notice) = setup();
        let prompt = ScriptedPrompt::new();
        let outcome = submit_new_todo(&mut store, &prompt, &mut notice, " walk dog ");
        assert!(matches!(outcome, SubmitOutcome::Added { id: 1, .. }));
        assert_eq!(store.list()[0].content, "walk dog");
        assert_eq!(notice.message, "Todo #1 added");
        assert_eq!(notice.severity, Severity::Success);
        assert!(prompt.alerts().is_empty());
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let (mut store, mut notice) = setup();
        let prompt = ScriptedPrompt::answering([false]);
        store.add("a").unwrap();
        assert_eq!(delete_todo(&mut store, &prompt, &mut notice, 1), None);
        assert_eq!(store.len(), 1);
        assert!(!notice.open);
        assert_eq!(prompt.confirms(), vec!["Delete todo #1?".to_string()]);
    }

    #[test]
    fn test_confirmed_delete_shows_error_notice() {
        let (mut store, mut notice) = setup();
        let prompt = ScriptedPrompt::answering([true]);
        store.add("a").unwrap();
        assert!(delete_todo(&mut store, &prompt, &mut notice, 1).is_some());
        assert!(store.is_empty());
        assert_eq!(notice.message, "Todo #1 deleted");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn test_confirm_delete_only_asks() {
        let (store, notice) = setup();
        let prompt = ScriptedPrompt::answering([false, true]);
        assert!(!confirm_delete(&prompt, 3));
        assert!(confirm_delete(&prompt, 3));
        assert_eq!(prompt.confirms(), vec!["Delete todo #3?".to_string(); 2]);
        assert!(store.is_empty());
        assert!(!notice.open);
    }

    #[test]
    fn test_delete_confirmed_skips_prompt() {
        let (mut store, mut notice) = setup();
        store.add("a").unwrap();
        delete_confirmed(&mut store, &mut notice, 1);
        assert!(store.is_empty());
        assert_eq!(notice.message, "Todo #1 deleted");
    }

    #[test]
    fn test_submit_with_exhausted_ids_alerts_error() {
        let storage = MemoryStorage::new();
        storage
            .set_item("todos", r#"[{"id":4294967295,"content":"x","regDate":"2024-01-01 09:00:00"}]"#)
            .unwrap();
        let mut store = TodoStore::new(storage, SystemClock);
        store.initialize();
        let mut notice = Notice::new(NoticeConfig::default());
        let prompt = ScriptedPrompt::new();

        let outcome = submit_new_todo(&mut store, &prompt, &mut notice, "y");
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(prompt.alerts(), vec![StoreError::IdExhausted.to_string()]);
        assert_eq!(store.len(), 1);
        assert!(!notice.open);
    }

    #[test]
    fn test_toggle_has_no_prompt() {
        let (mut store, _) = setup();
        store.add("a").unwrap();
        assert_eq!(toggle_todo(&mut store, 1), Some(true));
    }
}
