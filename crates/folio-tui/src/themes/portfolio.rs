//! Default theme: dark header, golden hero, green showcase, purple contact

use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        header_bg: Color::Rgb(0x18, 0x18, 0x1b),
        header_fg: Color::White,
        link_focus: Color::Rgb(0xd5, 0xad, 0x51),
        landing_bg: Color::Rgb(0xd5, 0xad, 0x51),
        landing_fg: Color::White,
        projects_bg: Color::Rgb(0x14, 0x53, 0x2d),
        projects_fg: Color::White,
        contact_bg: Color::Rgb(0x51, 0x2d, 0xa8),
        contact_fg: Color::White,
        card_bg: Color::White,
        card_fg: Color::Black,
        card_muted: Color::Rgb(0x52, 0x52, 0x5b),
        input_bg: Color::Rgb(0x43, 0x1f, 0x8f),
        input_fg: Color::White,
        input_border: Color::Rgb(0xb3, 0x9d, 0xdb),
        input_focus: Color::Rgb(0xd5, 0xad, 0x51),
        button_bg: Color::Rgb(0x80, 0x5a, 0xd5),
        button_fg: Color::White,
        status_bg: Color::Rgb(0x27, 0x27, 0x2a),
        status_fg: Color::Rgb(0xd4, 0xd4, 0xd8),
        muted: Color::Rgb(0xa1, 0xa1, 0xaa),
        error: Color::Rgb(0xfc, 0x81, 0x81),
        success: Color::Rgb(0x68, 0xd3, 0x91),
    }
}
