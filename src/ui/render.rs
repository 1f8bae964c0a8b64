use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::hit::{Affordance, HitMap};
use crate::ui::layout::{
    centered_rect_by_size, grid_cells, grid_rows, layout_regions, sidebar_rect, visible_grid_rows,
};
use crate::ui::receipt::ReceiptState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DANGER, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, OVERLAY_TEXT,
    POPUP_BORDER, PRICE_TEXT, TOAST_BACKGROUND, TOAST_TEXT,
};
use crate::ui::toast::ToastPhase;
use crate::ui::view::{
    image_name, project_cart, project_catalog, CartPanelView, ProductCardView, RECEIPT_HEADLINE,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const ADD_BUTTON: &str = "[ Add to Cart ]";
const CHECKOUT_BUTTON: &str = "[ Checkout ]";
const CLOSE_BUTTON: &str = "[x]";
const OK_BUTTON: &str = "[ OK ]";
/// Rows per cart line: title, controls, spacer.
const CART_ROW_HEIGHT: u16 = 3;

/// What a frame left behind for input handling.
#[derive(Debug, Default)]
pub struct Drawn {
    pub hits: HitMap,
    /// Largest card-row offset the catalog can scroll to.
    pub max_catalog_scroll: usize,
}

/// Redraw the whole screen from the current cart and UI state.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> Drawn {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let mut drawn = Drawn::default();
    let store = app.store();

    let header_widget = Header::new(store.item_count(), store.catalog().len());
    frame.render_widget(header_widget.widget(header), header);
    drawn
        .hits
        .register(header_widget.badge_rect(header), Affordance::OpenCart);

    frame.render_widget(Clear, body);
    let cards = project_catalog(store.catalog(), app.currency());
    drawn.max_catalog_scroll =
        grid_rows(body, cards.len()).saturating_sub(visible_grid_rows(body));
    let scroll = app.catalog_scroll().min(drawn.max_catalog_scroll);
    for (index, cell) in grid_cells(body, cards.len(), scroll) {
        draw_card(frame, &cards[index], cell, &mut drawn.hits);
    }

    frame.render_widget(Footer::new(app.footer_mode()).widget(footer), footer);

    if app.panel.is_open() {
        dim(frame, area);
        drawn.hits.register(area, Affordance::Overlay);
        let view = project_cart(store.cart(), app.currency());
        draw_cart_panel(frame, &view, app.panel.selected(), body, &mut drawn.hits);
    }

    draw_toasts(frame, app, body, footer);

    if let ReceiptState::Visible { total, item_count } = app.receipt {
        dim(frame, area);
        drawn.hits.block(area);
        let lines = vec![
            Line::from(Span::styled(
                RECEIPT_HEADLINE,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Total: "),
                Span::styled(total.label(app.currency()), Style::default().fg(PRICE_TEXT)),
            ]),
            Line::from(format!("Items: {item_count}")),
            Line::from(""),
        ];
        draw_receipt(frame, lines, body, &mut drawn.hits);
    }

    drawn
}

fn draw_card(frame: &mut Frame<'_>, card: &ProductCardView, cell: Rect, hits: &mut HitMap) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.position),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(cell);

    let lines = vec![
        Line::from(Span::styled(
            card.title,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.price_label.clone(),
            Style::default().fg(PRICE_TEXT),
        )),
        Line::from(Span::styled(
            image_name(card.image),
            Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            ADD_BUTTON,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), cell);

    // Only clickable when the button row survived clipping.
    if inner.height >= 4 {
        hits.register(
            button_rect(inner, 3, 0, ADD_BUTTON),
            Affordance::AddToCart(card.id),
        );
    }
}

fn draw_cart_panel(
    frame: &mut Frame<'_>,
    view: &CartPanelView,
    selected: Option<usize>,
    body: Rect,
    hits: &mut HitMap,
) {
    let panel = sidebar_rect(body);
    frame.render_widget(Clear, panel);
    hits.block(panel);

    let block = Block::default()
        .title(Span::styled(
            format!(" Cart ({}) ", view.item_count),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let close = Rect {
        x: (panel.x + panel.width).saturating_sub(CLOSE_BUTTON.len() as u16 + 1),
        y: panel.y,
        width: (CLOSE_BUTTON.len() as u16).min(panel.width),
        height: panel.height.min(1),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_BUTTON, Style::default().fg(DANGER))),
        close,
    );
    hits.register(close, Affordance::CloseCart);

    if inner.height < 3 {
        return;
    }

    // Last two rows hold the total and the checkout button.
    let rows_area = Rect {
        height: inner.height - 3,
        ..inner
    };
    let total_row = Rect {
        y: inner.y + inner.height - 2,
        height: 1,
        ..inner
    };
    let checkout_row = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };

    if let Some(message) = view.empty_message {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(DISABLED_TEXT))),
            Rect {
                height: rows_area.height.min(1),
                ..rows_area
            },
        );
    }

    let visible = usize::from(rows_area.height / CART_ROW_HEIGHT);
    let first = match selected {
        Some(index) if visible > 0 && index >= visible => index + 1 - visible,
        _ => 0,
    };
    for (slot, (index, row)) in view
        .rows
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let row_area = Rect {
            y: rows_area.y + slot as u16 * CART_ROW_HEIGHT,
            height: 2,
            ..rows_area
        };
        let highlight = if selected == Some(index) {
            Style::default().bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default()
        };

        let title = Line::from(vec![
            Span::styled(
                row.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(row.price_label.clone(), Style::default().fg(PRICE_TEXT)),
            Span::styled(
                format!("  {}", image_name(&row.image)),
                Style::default().fg(DISABLED_TEXT),
            ),
        ])
        .style(highlight);

        let decrease = Span::styled("[-]", Style::default().fg(ACCENT));
        let quantity = Span::raw(format!(" {} ", row.quantity));
        let increase = Span::styled("[+]", Style::default().fg(ACCENT));
        let gap = Span::raw("   ");
        let remove = Span::styled("[Remove]", Style::default().fg(DANGER));

        let decrease_at = 0;
        let increase_at = decrease_at + decrease.width() + quantity.width();
        let remove_at = increase_at + increase.width() + gap.width();
        let controls = Line::from(vec![decrease, quantity, increase, gap, remove]).style(highlight);

        frame.render_widget(Paragraph::new(vec![title, controls]), row_area);
        hits.register(
            button_rect(row_area, 1, decrease_at, "[-]"),
            Affordance::Decrease(row.id),
        );
        hits.register(
            button_rect(row_area, 1, increase_at, "[+]"),
            Affordance::Increase(row.id),
        );
        hits.register(
            button_rect(row_area, 1, remove_at, "[Remove]"),
            Affordance::Remove(row.id),
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Total: ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                view.total_label.clone(),
                Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD),
            ),
        ])),
        total_row,
    );

    let checkout_style = if view.checkout_enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED_TEXT)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(CHECKOUT_BUTTON, checkout_style)),
        checkout_row,
    );
    if view.checkout_enabled {
        hits.register(
            button_rect(checkout_row, 0, 0, CHECKOUT_BUTTON),
            Affordance::Checkout,
        );
    }
}

fn draw_toasts(frame: &mut Frame<'_>, app: &App, body: Rect, footer: Rect) {
    // Newest sits just above the footer; older ones stack upward.
    let mut bottom = footer.y;
    for toast in app.toasts.drawn().collect::<Vec<_>>().into_iter().rev() {
        if bottom < body.y + 3 {
            break;
        }
        bottom -= 3;
        let width = (toast.message.chars().count() as u16).saturating_add(4);
        let slot = Rect {
            y: bottom,
            height: 3,
            ..body
        };
        let toast_area = centered_rect_by_size(slot, width, 3);

        let mut style = Style::default().fg(TOAST_TEXT).bg(TOAST_BACKGROUND);
        if toast.phase == ToastPhase::Fading {
            style = style.add_modifier(Modifier::DIM);
        }
        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(Line::from(format!(" {} ", toast.message)))
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            toast_area,
        );
    }
}

fn draw_receipt(frame: &mut Frame<'_>, mut lines: Vec<Line<'static>>, body: Rect, hits: &mut HitMap) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(OK_BUTTON.len() as u16 + 4);
    let popup_height = (lines.len() as u16).saturating_add(3);
    let area = centered_rect_by_size(body, popup_width, popup_height);

    lines.push(Line::from(Span::styled(
        OK_BUTTON,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    let ok_line = lines.len() as u16 - 1;

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Order complete ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = popup.inner(area);
    frame.render_widget(Paragraph::new(lines).block(popup), area);

    if inner.height > ok_line {
        hits.register(
            button_rect(inner, ok_line, 0, OK_BUTTON),
            Affordance::DismissReceipt,
        );
    }
}

fn dim(frame: &mut Frame<'_>, area: Rect) {
    frame.buffer_mut().set_style(
        area,
        Style::default().fg(OVERLAY_TEXT).add_modifier(Modifier::DIM),
    );
}

/// One-row button at `offset` columns into line `line` of `area`,
/// clipped to the area's right edge.
fn button_rect(area: Rect, line: u16, offset: usize, label: &str) -> Rect {
    let offset = (offset as u16).min(area.width);
    let width = (label.chars().count() as u16).min(area.width - offset);
    Rect {
        x: area.x + offset,
        y: area.y + line,
        width,
        height: 1,
    }
}
