//! Prompt Seam
//!
//! Blocking confirm/alert dialogs. The browser binds these to
//! `window.confirm` / `window.alert`.

#[cfg(any(test, feature = "testing"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "testing"))]
use std::collections::VecDeque;

pub trait UserPrompt {
    /// Ask a yes/no question; `true` means accepted
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Prompt with queued answers that records everything it was shown
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming `confirm` calls. Unqueued calls decline.
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

#[cfg(any(test, feature = "testing"))]
impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
