// SPDX-License-Identifier: MIT

//! The notice sink: transient user-facing status messages.
//!
//! Severities are purely advisory and never gate control flow. The
//! controller talks to a [`NoticeSink`] trait so tests can record
//! notices instead of printing them.

use std::time::Duration;

use crate::colors::{self, codes};

/// How long success/info/warning notices linger in a UI that can
/// dismiss them. The terminal sink has nothing to dismiss and ignores
/// it; the durations mirror the service's web front end.
const AUTO_DISMISS: Duration = Duration::from_secs(4);
/// Danger notices stay up a little longer.
const AUTO_DISMISS_DANGER: Duration = Duration::from_secs(6);

/// Severity of a notice. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Returns the label used when printing the notice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Warning => "warning",
            Severity::Danger => "error",
        }
    }

    fn color(&self) -> u8 {
        match self {
            Severity::Info => codes::INFO,
            Severity::Success => codes::SUCCESS,
            Severity::Warning => codes::WARNING,
            Severity::Danger => codes::DANGER,
        }
    }
}

/// A single user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    /// `None` means the notice persists until dismissed by the user.
    pub auto_dismiss: Option<Duration>,
}

impl Notice {
    /// A notice with the default auto-dismiss interval for its severity.
    pub fn auto(severity: Severity, message: impl Into<String>) -> Self {
        let auto_dismiss = match severity {
            Severity::Danger => Some(AUTO_DISMISS_DANGER),
            _ => Some(AUTO_DISMISS),
        };
        Notice {
            severity,
            message: message.into(),
            auto_dismiss,
        }
    }

    /// A notice that persists until explicitly dismissed.
    pub fn sticky(severity: Severity, message: impl Into<String>) -> Self {
        Notice {
            severity,
            message: message.into(),
            auto_dismiss: None,
        }
    }
}

/// Destination for user-facing status messages.
///
/// Implementations must not call back into the controller: notices are
/// emitted while a cache borrow may still be held.
pub trait NoticeSink {
    /// Deliver one notice.
    fn notify(&self, notice: Notice);

    /// Show a blocking "in progress" indicator with no dismiss action.
    /// Stays up until [`busy_end`](NoticeSink::busy_end). By default
    /// this is a sticky info notice.
    fn busy_start(&self, message: &str) {
        self.notify(Notice::sticky(Severity::Info, message));
    }

    /// Clear the indicator shown by [`busy_start`](NoticeSink::busy_start).
    /// A terminal has nothing to clear; the next output line supersedes
    /// the indicator.
    fn busy_end(&self) {}
}

/// Prints notices to stderr, color-coded by severity.
pub struct TerminalSink {
    colorize: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        TerminalSink {
            colorize: colors::should_colorize(),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for TerminalSink {
    fn notify(&self, notice: Notice) {
        let label = colors::paint(
            notice.severity.as_str(),
            notice.severity.color(),
            self.colorize,
        );
        eprintln!("{}: {}", label, notice.message);
    }
}


#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
