use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x34, 0x98, 0xdb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PRICE_TEXT: Color = Color::Rgb(0xf3, 0x9c, 0x12);
pub const TOAST_BACKGROUND: Color = Color::Rgb(0x2e, 0xcc, 0x71);
pub const TOAST_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const DANGER: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const DISABLED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const OVERLAY_TEXT: Color = Color::Rgb(0x4b, 0x4b, 0x4b);
