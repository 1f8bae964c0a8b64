use crate::cart::QuantityChange;
use crate::ui::app::{Action, App};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

/// Translate a key press into an action for the current layer.
pub fn key_action(app: &App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(Action::Quit);
    }

    if app.receipt.is_visible() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissReceipt),
            _ => None,
        };
    }

    if app.panel.is_open() {
        return match key.code {
            KeyCode::Esc => Some(Action::CloseCart),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::ToggleCart),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                Some(Action::ChangeSelected(QuantityChange::Increase))
            }
            KeyCode::Char('-') | KeyCode::Left => {
                Some(Action::ChangeSelected(QuantityChange::Decrease))
            }
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                Some(Action::RemoveSelected)
            }
            KeyCode::Char('x') | KeyCode::Char('X') => Some(Action::Checkout),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(digit @ '1'..='9') => {
            let position = digit.to_digit(10).map(|value| value as usize)?;
            Some(Action::AddNth(position))
        }
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::ToggleCart),
        KeyCode::Up | KeyCode::PageUp => Some(Action::ScrollCatalog(-1)),
        KeyCode::Down | KeyCode::PageDown => Some(Action::ScrollCatalog(1)),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if let Some(action) = key_action(app, key) {
        app.dispatch(action, now);
    }
}

/// Left clicks go through the hit map; the wheel scrolls the catalog.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.on_click(mouse.column, mouse.row, now);
        }
        MouseEventKind::ScrollUp => app.dispatch(Action::ScrollCatalog(-1), now),
        MouseEventKind::ScrollDown => app.dispatch(Action::ScrollCatalog(1), now),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::storage::{KeyValueCartStorage, MemoryStore};

    fn make_app() -> App {
        let storage = KeyValueCartStorage::new(MemoryStore::new());
        let store = CartStore::open(Catalog::builtin(), Box::new(storage)).unwrap();
        App::new(store, &Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_add_by_position() {
        let app = make_app();
        assert_eq!(
            key_action(&app, press(KeyCode::Char('3'))),
            Some(Action::AddNth(3))
        );
        assert_eq!(key_action(&app, press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = make_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_action(&app, ctrl_c), Some(Action::Quit));

        app.dispatch(Action::OpenCart, Instant::now());
        assert_eq!(key_action(&app, ctrl_c), Some(Action::Quit));
        assert_eq!(key_action(&app, press(KeyCode::Char('c'))), Some(Action::ToggleCart));
    }

    #[test]
    fn panel_keys_target_selection() {
        let mut app = make_app();
        app.dispatch(Action::OpenCart, Instant::now());
        assert_eq!(
            key_action(&app, press(KeyCode::Char('+'))),
            Some(Action::ChangeSelected(QuantityChange::Increase))
        );
        assert_eq!(key_action(&app, press(KeyCode::Esc)), Some(Action::CloseCart));
        assert_eq!(key_action(&app, press(KeyCode::Char('1'))), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let app = make_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(&app, key), None);
    }
}
