//! Toast notifications: one at a time, auto-dismissed, animated out.

use std::time::{Duration, Instant};

/// Exit animation length before a dismissed toast is removed.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing { until: Instant },
    Leaving { until: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, ToastPhase::Leaving { .. })
    }
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    lifetime: Duration,
    next_id: u64,
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            next_id: 1,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replace any toast on screen with a new one. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id, ?severity, %message, "toast shown");
        self.current = Some(Notification {
            id,
            message,
            severity,
            phase: ToastPhase::Showing {
                until: now + self.lifetime,
            },
            shown_at: now,
        });
        id
    }

    /// Start the exit animation of the current toast.
    pub fn close(&mut self, now: Instant) {
        if let Some(toast) = self.current.as_mut() {
            if !toast.is_leaving() {
                toast.phase = ToastPhase::Leaving {
                    until: now + TOAST_EXIT,
                };
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(toast) = self.current.as_mut() else {
            return;
        };
        match toast.phase {
            ToastPhase::Showing { until } if until <= now => {
                toast.phase = ToastPhase::Leaving {
                    until: until + TOAST_EXIT,
                };
                if until + TOAST_EXIT <= now {
                    self.current = None;
                }
            }
            ToastPhase::Leaving { until } if until <= now => {
                self.current = None;
            }
            _ => {}
        }
    }
}
