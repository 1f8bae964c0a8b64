use crate::money::Money;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceiptState {
    #[default]
    Hidden,
    Visible {
        total: Money,
        item_count: u32,
    },
}

impl UiState for ReceiptState {}

impl ReceiptState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
