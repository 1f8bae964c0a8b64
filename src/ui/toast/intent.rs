use std::time::Instant;

use uuid::Uuid;

use crate::ui::mvi::Intent;
use crate::ui::toast::state::ToastTiming;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    Push {
        id: Uuid,
        message: String,
        now: Instant,
        timing: ToastTiming,
    },
    /// Advance every toast's timeline to `now`.
    Tick { now: Instant },
}

impl Intent for ToastIntent {}
