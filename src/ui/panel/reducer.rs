use crate::ui::mvi::Reducer;
use crate::ui::panel::intent::PanelIntent;
use crate::ui::panel::state::PanelState;

pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = PanelState;
    type Intent = PanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PanelIntent::Open => match state {
                PanelState::Closed => PanelState::Open { selected: 0 },
                open => open,
            },
            PanelIntent::Close => PanelState::Closed,
            PanelIntent::Toggle => match state {
                PanelState::Closed => PanelState::Open { selected: 0 },
                PanelState::Open { .. } => PanelState::Closed,
            },
            PanelIntent::SelectNext { lines } => match state {
                PanelState::Open { selected } => {
                    let selected = if selected + 1 >= lines { 0 } else { selected + 1 };
                    PanelState::Open { selected }
                }
                closed => closed,
            },
            PanelIntent::SelectPrevious { lines } => match state {
                PanelState::Open { selected } => {
                    let selected = if selected == 0 {
                        lines.saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    PanelState::Open { selected }
                }
                closed => closed,
            },
            PanelIntent::Clamp { lines } => match state {
                PanelState::Open { selected } => PanelState::Open {
                    selected: selected.min(lines.saturating_sub(1)),
                },
                closed => closed,
            },
        }
    }
}
