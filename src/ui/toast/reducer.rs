use std::time::Instant;

use crate::ui::mvi::Reducer;
use crate::ui::toast::intent::ToastIntent;
use crate::ui::toast::state::{Toast, ToastPhase, ToastState};

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Push {
                id,
                message,
                now,
                timing,
            } => {
                let mut toasts = state.toasts;
                toasts.push(Toast::new(id, message, now, timing));
                ToastState {
                    toasts: advance(toasts, now),
                }
            }
            ToastIntent::Tick { now } => ToastState {
                toasts: advance(state.toasts, now),
            },
        }
    }
}

fn advance(toasts: Vec<Toast>, now: Instant) -> Vec<Toast> {
    toasts
        .into_iter()
        .filter(|toast| now < toast.remove_at)
        .map(|mut toast| {
            toast.phase = if now >= toast.fade_at {
                ToastPhase::Fading
            } else if now >= toast.show_at {
                ToastPhase::Shown
            } else {
                ToastPhase::Pending
            };
            toast
        })
        .collect()
}
