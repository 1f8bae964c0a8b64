//! Clickable regions recorded while drawing.
//!
//! Every frame registers its affordances in paint order. A click resolves
//! to the last-painted region under the pointer, so overlays and dialogs
//! shadow whatever is beneath them.

use ratatui::layout::Rect;

use crate::catalog::ProductId;

/// Role of a clickable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    AddToCart(ProductId),
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
    OpenCart,
    CloseCart,
    /// Dimming layer behind the open cart panel.
    Overlay,
    Checkout,
    DismissReceipt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// `None` marks an inert surface that swallows clicks.
    regions: Vec<(Rect, Option<Affordance>)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, area: Rect, affordance: Affordance) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, Some(affordance)));
        }
    }

    /// Mark `area` as opaque to clicks.
    pub fn block(&mut self, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, None));
        }
    }

    /// Topmost affordance at the given cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Affordance> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .and_then(|(_, affordance)| *affordance)
    }

    /// Area of the topmost region with this role.
    pub fn area_of(&self, affordance: Affordance) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, role)| *role == Some(affordance))
            .map(|(area, _)| *area)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && u32::from(column) < u32::from(area.x) + u32::from(area.width)
        && u32::from(row) < u32::from(area.y) + u32::from(area.height)
}
