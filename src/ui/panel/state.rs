use crate::ui::mvi::UiState;

/// Visibility of the cart side panel and its dimming overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open {
        /// Cart line targeted by keyboard shortcuts.
        selected: usize,
    },
}

impl UiState for PanelState {}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Open { selected } => Some(*selected),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_default() {
        assert_eq!(PanelState::default(), PanelState::Closed);
        assert!(!PanelState::Closed.is_open());
        assert_eq!(PanelState::Closed.selected(), None);
    }
}
