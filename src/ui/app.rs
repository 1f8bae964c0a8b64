use crate::cart::{AddOutcome, CartStore, QuantityChange};
use crate::catalog::ProductId;
use crate::config::Config;
use crate::storage::StorageError;
use crate::ui::footer::FooterMode;
use crate::ui::hit::{Affordance, HitMap};
use crate::ui::mvi::Reducer;
use crate::ui::panel::{PanelIntent, PanelReducer, PanelState};
use crate::ui::receipt::{ReceiptIntent, ReceiptReducer, ReceiptState};
use crate::ui::render::Drawn;
use crate::ui::toast::{ToastIntent, ToastReducer, ToastState, ToastTiming};
use crate::ui::view::added_message;
use std::time::Instant;
use uuid::Uuid;

/// Everything the user can ask for, from a click or a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddToCart(ProductId),
    /// Add the catalog product at a 1-based position.
    AddNth(usize),
    ChangeQuantity(ProductId, QuantityChange),
    Remove(ProductId),
    /// Quantity change on the line selected in the open panel.
    ChangeSelected(QuantityChange),
    RemoveSelected,
    SelectNext,
    SelectPrevious,
    OpenCart,
    CloseCart,
    ToggleCart,
    Checkout,
    DismissReceipt,
    /// Scroll the catalog grid by card rows.
    ScrollCatalog(i32),
    Quit,
}

impl From<Affordance> for Action {
    fn from(affordance: Affordance) -> Self {
        match affordance {
            Affordance::AddToCart(id) => Action::AddToCart(id),
            Affordance::Increase(id) => Action::ChangeQuantity(id, QuantityChange::Increase),
            Affordance::Decrease(id) => Action::ChangeQuantity(id, QuantityChange::Decrease),
            Affordance::Remove(id) => Action::Remove(id),
            Affordance::OpenCart => Action::OpenCart,
            Affordance::CloseCart | Affordance::Overlay => Action::CloseCart,
            Affordance::Checkout => Action::Checkout,
            Affordance::DismissReceipt => Action::DismissReceipt,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Interaction controller.
///
/// Owns the cart store and the transient UI layers. Every gesture becomes
/// an [`Action`] passed to [`App::dispatch`]; drawing reads the result back
/// on the next frame.
pub struct App {
    should_quit: bool,
    store: CartStore,
    currency: String,
    toast_timing: ToastTiming,
    /// Cart panel visibility (MVI pattern).
    pub panel: PanelState,
    /// Live "added to cart" toasts (MVI pattern).
    pub toasts: ToastState,
    /// Checkout confirmation dialog (MVI pattern).
    pub receipt: ReceiptState,
    hits: HitMap,
    catalog_scroll: usize,
    max_catalog_scroll: usize,
}

impl App {
    pub fn new(store: CartStore, config: &Config) -> Self {
        Self {
            should_quit: false,
            store,
            currency: config.ui.currency.clone(),
            toast_timing: ToastTiming::from(&config.notifications),
            panel: PanelState::default(),
            toasts: ToastState::default(),
            receipt: ReceiptState::default(),
            hits: HitMap::new(),
            catalog_scroll: 0,
            max_catalog_scroll: 0,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog_scroll(&self) -> usize {
        self.catalog_scroll
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn footer_mode(&self) -> FooterMode {
        if self.receipt.is_visible() {
            FooterMode::Receipt
        } else if self.panel.is_open() {
            FooterMode::Cart
        } else {
            FooterMode::Catalog
        }
    }

    /// Record what the last frame drew so clicks can be resolved.
    pub fn set_drawn(&mut self, drawn: Drawn) {
        self.hits = drawn.hits;
        self.max_catalog_scroll = drawn.max_catalog_scroll;
        self.catalog_scroll = self.catalog_scroll.min(self.max_catalog_scroll);
    }

    /// Delegated click handler: resolves the affordance under the pointer
    /// and dispatches its action. Returns whether anything was hit.
    pub fn on_click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let Some(affordance) = self.hits.hit(column, row) else {
            return false;
        };
        tracing::trace!(?affordance, column, row, "click");
        self.dispatch(Action::from(affordance), now);
        true
    }

    pub fn on_tick(&mut self, now: Instant) {
        if !self.toasts.is_empty() {
            dispatch_mvi!(self, toasts, ToastReducer, ToastIntent::Tick { now });
        }
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        if self.receipt.is_visible() && !matches!(action, Action::DismissReceipt | Action::Quit) {
            return;
        }

        match action {
            Action::AddToCart(id) => self.add_to_cart(id, now),
            Action::AddNth(position) => {
                if let Some(product) = self.store.catalog().nth(position) {
                    self.add_to_cart(product.id, now);
                }
            }
            Action::ChangeQuantity(id, change) => {
                let result = self.store.update_quantity(id, change);
                self.keep_storage_going("update quantity", result);
                self.clamp_selection();
            }
            Action::Remove(id) => {
                let result = self.store.remove(id);
                self.keep_storage_going("remove", result);
                self.clamp_selection();
            }
            Action::ChangeSelected(change) => {
                if let Some(id) = self.selected_product() {
                    self.dispatch(Action::ChangeQuantity(id, change), now);
                }
            }
            Action::RemoveSelected => {
                if let Some(id) = self.selected_product() {
                    self.dispatch(Action::Remove(id), now);
                }
            }
            Action::SelectNext => {
                let lines = self.store.cart().len();
                self.dispatch_panel(PanelIntent::SelectNext { lines });
            }
            Action::SelectPrevious => {
                let lines = self.store.cart().len();
                self.dispatch_panel(PanelIntent::SelectPrevious { lines });
            }
            Action::OpenCart => self.dispatch_panel(PanelIntent::Open),
            Action::CloseCart => self.dispatch_panel(PanelIntent::Close),
            Action::ToggleCart => self.dispatch_panel(PanelIntent::Toggle),
            Action::Checkout => self.checkout(),
            Action::DismissReceipt => {
                dispatch_mvi!(self, receipt, ReceiptReducer, ReceiptIntent::Dismiss);
            }
            Action::ScrollCatalog(delta) => self.scroll_catalog(delta),
            Action::Quit => self.request_quit(),
        }
    }

    fn add_to_cart(&mut self, id: ProductId, now: Instant) {
        let result = self.store.add(id);
        let Some(AddOutcome::Added { title, .. }) = self.keep_storage_going("add", result) else {
            return;
        };
        dispatch_mvi!(
            self,
            toasts,
            ToastReducer,
            ToastIntent::Push {
                id: Uuid::new_v4(),
                message: added_message(title),
                now,
                timing: self.toast_timing,
            }
        );
    }

    fn checkout(&mut self) {
        let total = self.store.total();
        let item_count = self.store.item_count();
        let completed = match self.store.checkout() {
            Ok(receipt) => receipt.is_some(),
            Err(err) => {
                // The cart is cleared in memory even when the write failed.
                self.report_storage_error("checkout", &err);
                item_count > 0
            }
        };
        if !completed {
            return;
        }
        dispatch_mvi!(
            self,
            receipt,
            ReceiptReducer,
            ReceiptIntent::Show { total, item_count }
        );
        self.dispatch_panel(PanelIntent::Close);
    }

    fn scroll_catalog(&mut self, delta: i32) {
        // Background scrolling is suppressed while the panel covers it.
        if self.panel.is_open() {
            return;
        }
        let next = if delta.is_negative() {
            self.catalog_scroll
                .saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.catalog_scroll.saturating_add(delta as usize)
        };
        self.catalog_scroll = next.min(self.max_catalog_scroll);
    }

    fn selected_product(&self) -> Option<ProductId> {
        let index = self.panel.selected()?;
        self.store.cart().lines().get(index).map(|line| line.id)
    }

    fn clamp_selection(&mut self) {
        let lines = self.store.cart().len();
        self.dispatch_panel(PanelIntent::Clamp { lines });
    }

    /// Dispatch an intent to the panel reducer.
    fn dispatch_panel(&mut self, intent: PanelIntent) {
        dispatch_mvi!(self, panel, PanelReducer, intent);
    }

    /// Storage failures never stop the session: the in-memory cart keeps
    /// the change and the failure goes to the log.
    fn keep_storage_going<T>(&self, operation: &str, result: Result<T, StorageError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report_storage_error(operation, &err);
                None
            }
        }
    }

    fn report_storage_error(&self, operation: &str, err: &StorageError) {
        tracing::error!(operation, error = %err, "failed to persist cart");
    }
}
