use crate::money::Money;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptIntent {
    Show { total: Money, item_count: u32 },
    Dismiss,
}

impl Intent for ReceiptIntent {}
