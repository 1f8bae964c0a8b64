use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which layer currently receives input; decides the key hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Catalog,
    Cart,
    Receipt,
}

pub struct Footer {
    mode: FooterMode,
}

impl Footer {
    pub fn new(mode: FooterMode) -> Self {
        Self { mode }
    }

    pub fn hints(&self) -> &'static str {
        match self.mode {
            FooterMode::Catalog => " 1-9: Add │ C: Cart │ ↑↓: Scroll │ Q: Quit",
            FooterMode::Cart => {
                " ↑↓: Select │ +/-: Qty │ D: Remove │ X: Checkout │ Esc: Close │ Q: Quit"
            }
            FooterMode::Receipt => " Enter: OK │ Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count: hints contain box-drawing glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
