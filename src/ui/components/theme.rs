//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 175, 239);
pub const ACCENT_SUCCESS: Color = Color::Rgb(152, 195, 121);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
pub const TEXT_SECONDARY: Color = Color::Rgb(171, 178, 191);
pub const TEXT_MUTED: Color = Color::Rgb(120, 126, 138);
pub const TEXT_FAINT: Color = Color::Rgb(80, 85, 95);

pub const BORDER_DEFAULT: Color = Color::Rgb(70, 75, 85);
pub const SURFACE_BG: Color = Color::Rgb(35, 38, 45);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
