use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::NotificationConfig;
use crate::ui::mvi::UiState;

/// Durations of a toast's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Hidden this long after push.
    pub fade_in: Duration,
    /// Starts fading this long after push.
    pub visible: Duration,
    /// Removed this long after it starts fading.
    pub fade_out: Duration,
}

impl From<&NotificationConfig> for ToastTiming {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            fade_in: Duration::from_millis(config.fade_in_ms),
            visible: Duration::from_millis(config.visible_ms),
            fade_out: Duration::from_millis(config.fade_out_ms),
        }
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Pushed but not drawn yet.
    Pending,
    Shown,
    /// Drawn dimmed until removal.
    Fading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub phase: ToastPhase,
    pub(super) show_at: Instant,
    pub(super) fade_at: Instant,
    pub(super) remove_at: Instant,
}

impl Toast {
    pub(super) fn new(id: Uuid, message: String, now: Instant, timing: ToastTiming) -> Self {
        let fade_at = now + timing.visible;
        Self {
            id,
            message,
            phase: ToastPhase::Pending,
            show_at: now + timing.fade_in,
            fade_at,
            remove_at: fade_at + timing.fade_out,
        }
    }

    pub fn is_drawn(&self) -> bool {
        !matches!(self.phase, ToastPhase::Pending)
    }
}

/// Live toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Toasts to draw, oldest first.
    pub fn drawn(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|toast| toast.is_drawn())
    }
}
