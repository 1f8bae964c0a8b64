use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelIntent {
    /// Cart badge clicked or `c` pressed while closed.
    Open,
    /// Close affordance, overlay click, or Esc.
    Close,
    Toggle,
    /// Move the keyboard selection; `lines` is the current cart length.
    SelectNext { lines: usize },
    SelectPrevious { lines: usize },
    /// Keep the selection inside the cart after lines disappear.
    Clamp { lines: usize },
}

impl Intent for PanelIntent {}
