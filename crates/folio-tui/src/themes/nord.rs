//! Nord
//! https://www.nordtheme.com/

use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        header_bg: Color::Rgb(0x2e, 0x34, 0x40),   // nord0
        header_fg: Color::Rgb(0xec, 0xef, 0xf4),   // nord6
        link_focus: Color::Rgb(0x88, 0xc0, 0xd0),  // nord8
        landing_bg: Color::Rgb(0x3b, 0x42, 0x52),  // nord1
        landing_fg: Color::Rgb(0xec, 0xef, 0xf4),
        projects_bg: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        projects_fg: Color::Rgb(0xe5, 0xe9, 0xf0), // nord5
        contact_bg: Color::Rgb(0x3b, 0x42, 0x52),
        contact_fg: Color::Rgb(0xe5, 0xe9, 0xf0),
        card_bg: Color::Rgb(0xd8, 0xde, 0xe9),     // nord4
        card_fg: Color::Rgb(0x2e, 0x34, 0x40),
        card_muted: Color::Rgb(0x4c, 0x56, 0x6a),  // nord3
        input_bg: Color::Rgb(0x2e, 0x34, 0x40),
        input_fg: Color::Rgb(0xec, 0xef, 0xf4),
        input_border: Color::Rgb(0x81, 0xa1, 0xc1), // nord9
        input_focus: Color::Rgb(0x8f, 0xbc, 0xbb),  // nord7
        button_bg: Color::Rgb(0x5e, 0x81, 0xac),    // nord10
        button_fg: Color::Rgb(0xec, 0xef, 0xf4),
        status_bg: Color::Rgb(0x2e, 0x34, 0x40),
        status_fg: Color::Rgb(0xd8, 0xde, 0xe9),
        muted: Color::Rgb(0x5e, 0x68, 0x7a),
        error: Color::Rgb(0xbf, 0x61, 0x6a),   // nord11
        success: Color::Rgb(0xa3, 0xbe, 0x8c), // nord14
    }
}
