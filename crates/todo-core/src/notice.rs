//! Notice
//!
//! Transient feedback shown after adding or deleting a todo.
//! One message at a time: `show` overwrites whatever is displayed.

use crate::config::NoticeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Filled,
    Outlined,
    Standard,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Outlined => "outlined",
            Variant::Standard => "standard",
        }
    }
}

/// Identifies one `show` call so its auto-hide timer can tell whether it
/// is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct Notice {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    pub auto_hide_ms: u32,
    pub variant: Variant,
    config: NoticeConfig,
    generation: u64,
}

impl Notice {
    pub fn new(config: NoticeConfig) -> Self {
        Self {
            auto_hide_ms: config.auto_hide_ms,
            variant: config.variant,
            config,
            ..Default::default()
        }
    }

    /// Open with explicit duration and variant
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        auto_hide_ms: u32,
        variant: Variant,
    ) -> NoticeTicket {
        self.generation += 1;
        self.open = true;
        self.message = message.into();
        self.severity = severity;
        self.auto_hide_ms = auto_hide_ms;
        self.variant = variant;
        NoticeTicket(self.generation)
    }

    /// Open with the configured duration and variant
    pub fn show_default(&mut self, message: impl Into<String>, severity: Severity) -> NoticeTicket {
        let NoticeConfig { auto_hide_ms, variant } = self.config;
        self.show(message, severity, auto_hide_ms, variant)
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Auto-hide callback. Closes only if no newer `show` happened.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if self.open && ticket.0 == self.generation {
            self.open = false;
            true
        } else {
            false
        }
    }
}
