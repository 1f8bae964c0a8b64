use ratatui::layout::Rect;

/// Outer width of a product card.
pub const CARD_WIDTH: u16 = 30;
/// Outer height of a product card.
pub const CARD_HEIGHT: u16 = 6;

const SIDEBAR_MIN_WIDTH: u16 = 40;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Right-hand cart panel: 40% of the screen, at least
/// `SIDEBAR_MIN_WIDTH` columns when there is room.
pub fn sidebar_rect(area: Rect) -> Rect {
    let width = (area.width / 5 * 2).max(SIDEBAR_MIN_WIDTH).min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Rectangle of the given size centered in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Number of card columns that fit in `body`.
pub fn grid_columns(body: Rect) -> usize {
    usize::from((body.width / CARD_WIDTH).max(1))
}

/// Number of card rows needed for `count` cards.
pub fn grid_rows(body: Rect, count: usize) -> usize {
    count.div_ceil(grid_columns(body))
}

/// Card rows visible at once.
pub fn visible_grid_rows(body: Rect) -> usize {
    usize::from((body.height / CARD_HEIGHT).max(1))
}

/// Cells for `count` cards starting at card row `scroll`.
///
/// Cards above the scroll offset or below the body are omitted; the
/// returned pairs carry the card index.
pub fn grid_cells(body: Rect, count: usize, scroll: usize) -> Vec<(usize, Rect)> {
    let columns = grid_columns(body);
    let visible_rows = visible_grid_rows(body);
    (0..count)
        .filter_map(|index| {
            let row = index / columns;
            if row < scroll || row >= scroll + visible_rows {
                return None;
            }
            let column = (index % columns) as u16;
            let y = body.y + (row - scroll) as u16 * CARD_HEIGHT;
            let cell = Rect {
                x: body.x + column * CARD_WIDTH,
                y,
                width: CARD_WIDTH.min(body.width),
                height: CARD_HEIGHT.min(body.y + body.height - y),
            };
            Some((index, cell))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 100, 30));
        assert_eq!(header, Rect::new(0, 0, 100, 3));
        assert_eq!(body, Rect::new(0, 3, 100, 24));
        assert_eq!(footer, Rect::new(0, 27, 100, 3));
    }

    #[test]
    fn sidebar_keeps_minimum_width() {
        assert_eq!(sidebar_rect(Rect::new(0, 3, 60, 20)), Rect::new(20, 3, 40, 20));
        assert_eq!(sidebar_rect(Rect::new(0, 3, 30, 20)), Rect::new(0, 3, 30, 20));
        assert_eq!(sidebar_rect(Rect::new(0, 3, 200, 20)).width, 80);
    }

    #[test]
    fn grid_wraps_and_scrolls() {
        let body = Rect::new(0, 3, 90, 12);
        assert_eq!(grid_columns(body), 3);
        assert_eq!(grid_rows(body, 5), 2);
        assert_eq!(visible_grid_rows(body), 2);

        let cells = grid_cells(body, 5, 0);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[3], (3, Rect::new(0, 9, 30, 6)));

        let small = Rect::new(0, 3, 90, 6);
        let cells = grid_cells(small, 5, 1);
        let indexes: Vec<usize> = cells.iter().map(|(index, _)| *index).collect();
        assert_eq!(indexes, vec![3, 4]);
        assert_eq!(cells[0].1.y, 3);
    }
}
