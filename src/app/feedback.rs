//! Temporary label swaps on buttons ("Copied!", "Copy failed").

use std::time::{Duration, Instant};

/// How long a feedback label stays up before the button reverts.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

pub const COPY_CONFIRMATION_LABEL: &str = "Copied!";
pub const COPY_ERROR_LABEL: &str = "Copy failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Confirmation,
    Error,
}

#[derive(Debug, Clone)]
struct ActiveFeedback {
    kind: FeedbackKind,
    until: Instant,
}

/// Label and enabled state for one button that can show transient feedback.
///
/// While feedback is active the button shows the feedback label and is
/// disabled. A new trigger inside the window replaces the label and restarts
/// the timer from the new trigger.
#[derive(Debug, Clone)]
pub struct TransientFeedback {
    idle_label: String,
    active: Option<ActiveFeedback>,
}

impl TransientFeedback {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            idle_label: idle_label.into(),
            active: None,
        }
    }

    pub fn show(&mut self, kind: FeedbackKind, now: Instant) {
        self.active = Some(ActiveFeedback {
            kind,
            until: now + FEEDBACK_DURATION,
        });
    }

    /// Revert to the idle label once the window has passed.
    ///
    /// Returns `true` on the call that performs the revert.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.active.as_ref().is_some_and(|a| now >= a.until);
        if expired {
            self.active = None;
        }
        expired
    }

    pub fn label(&self) -> &str {
        match self.active.as_ref().map(|a| a.kind) {
            None => self.idle_label.as_str(),
            Some(FeedbackKind::Confirmation) => COPY_CONFIRMATION_LABEL,
            Some(FeedbackKind::Error) => COPY_ERROR_LABEL,
        }
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    pub fn is_disabled(&self) -> bool {
        self.active.is_some()
    }

    /// Time left until the revert, for scheduling a repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|a| a.until.saturating_duration_since(now))
    }
}
