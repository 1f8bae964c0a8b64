//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use shopcart::cart::CartStore;
use shopcart::catalog::Catalog;
use shopcart::config::Config;
use shopcart::storage::{JsonFileStore, KeyValueCartStorage, MemoryStore};
use shopcart::ui::app::App;
use shopcart::ui::render::{draw, Drawn};
use std::path::PathBuf;
use tempfile::TempDir;

/// Cart store over a fresh in-memory key-value store.
pub fn memory_store() -> (CartStore, MemoryStore) {
    let memory = MemoryStore::new();
    let store = open_memory(&memory);
    (store, memory)
}

/// Reopen a cart store over an existing in-memory store.
pub fn open_memory(memory: &MemoryStore) -> CartStore {
    CartStore::open(
        Catalog::builtin(),
        Box::new(KeyValueCartStorage::new(memory.clone())),
    )
    .expect("memory storage opens")
}

/// Temp dir holding a `storage.json` path (not created yet).
pub fn temp_storage() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("storage.json");
    (temp_dir, path)
}

pub fn open_file(path: &PathBuf) -> CartStore {
    CartStore::open(
        Catalog::builtin(),
        Box::new(KeyValueCartStorage::new(JsonFileStore::new(path.clone()))),
    )
    .expect("file storage opens")
}

pub fn make_app() -> App {
    let (store, _) = memory_store();
    App::new(store, &Config::default())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn scroll_down() -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

/// Draw one frame into a test backend, hand the hit map to the app and
/// return the screen as text rows.
pub fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut drawn = Drawn::default();
    terminal.draw(|frame| drawn = draw(frame, app)).unwrap();
    app.set_drawn(drawn);
    buffer_rows(terminal.backend().buffer())
}

pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
