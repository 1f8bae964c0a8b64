use crate::ui::mvi::Reducer;
use crate::ui::receipt::intent::ReceiptIntent;
use crate::ui::receipt::state::ReceiptState;

pub struct ReceiptReducer;

impl Reducer for ReceiptReducer {
    type State = ReceiptState;
    type Intent = ReceiptIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReceiptIntent::Show { total, item_count } => {
                ReceiptState::Visible { total, item_count }
            }
            ReceiptIntent::Dismiss => ReceiptState::Hidden,
        }
    }
}
