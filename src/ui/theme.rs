use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const LABEL_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DISABLED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BAR_EMPTY: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const CHANNEL_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const CHANNEL_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CHANNEL_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
