use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const STORE_NAME: &str = "Language Store";

/// Top bar: store name on the left, cart badge on the right.
pub struct Header {
    item_count: u32,
    product_count: usize,
}

impl Header {
    pub fn new(item_count: u32, product_count: usize) -> Self {
        Self {
            item_count,
            product_count,
        }
    }

    pub fn badge_label(&self) -> String {
        format!("[ Cart ({}) ]", self.item_count)
    }

    /// Clickable badge, on the text row between the borders.
    pub fn badge_rect(&self, area: Rect) -> Rect {
        let width = (self.badge_label().chars().count() as u16).min(area.width);
        Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + area.height.min(1),
            width,
            height: area.height.min(1),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let badge_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let left = vec![
            Span::styled("  ", text_style),
            Span::styled(STORE_NAME, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} products", self.product_count), text_style),
        ];
        let left_width: usize = left.iter().map(Span::width).sum();
        let badge = self.badge_label();
        let padding = (area.width as usize)
            .saturating_sub(left_width)
            .saturating_sub(badge.chars().count() + 1);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(badge, badge_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
