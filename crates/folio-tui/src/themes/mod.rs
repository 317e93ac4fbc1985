//! Built-in themes

mod gruvbox;
mod nord;
mod portfolio;

use tracing::warn;

use crate::theme::Theme;

pub use gruvbox::dark as gruvbox_dark;
pub use nord::default as nord;
pub use portfolio::default as portfolio;

/// Names accepted by [`load_theme`]
pub const THEME_NAMES: [&str; 3] = ["portfolio", "gruvbox-dark", "nord"];

/// Load a theme by name, falling back to the default
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "portfolio" => portfolio(),
        "gruvbox-dark" | "gruvbox" => gruvbox_dark(),
        "nord" => nord(),
        other => {
            warn!("Unknown theme '{}', using 'portfolio'", other);
            portfolio()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_load_known_themes() {
        for name in THEME_NAMES {
            let _ = load_theme(name);
        }
        assert_eq!(load_theme("NORD").header_bg, nord().header_bg);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(load_theme("nope").landing_bg, Color::Rgb(0xd5, 0xad, 0x51));
    }
}
