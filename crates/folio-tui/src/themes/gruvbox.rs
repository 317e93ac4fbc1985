//! Gruvbox Material dark

use ratatui::style::Color;

use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        header_bg: Color::Rgb(0x1d, 0x20, 0x21),
        header_fg: Color::Rgb(0xd4, 0xbe, 0x98),
        link_focus: Color::Rgb(0xd8, 0xa6, 0x57),
        landing_bg: Color::Rgb(0x28, 0x28, 0x28),
        landing_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
        projects_bg: Color::Rgb(0x32, 0x30, 0x2f),
        projects_fg: Color::Rgb(0xd4, 0xbe, 0x98),
        contact_bg: Color::Rgb(0x28, 0x28, 0x28),
        contact_fg: Color::Rgb(0xd4, 0xbe, 0x98),
        card_bg: Color::Rgb(0x45, 0x40, 0x3d),
        card_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
        card_muted: Color::Rgb(0xa8, 0x99, 0x84),
        input_bg: Color::Rgb(0x32, 0x30, 0x2f),
        input_fg: Color::Rgb(0xd4, 0xbe, 0x98),
        input_border: Color::Rgb(0x7c, 0x6f, 0x64),
        input_focus: Color::Rgb(0x89, 0xb4, 0x82),
        button_bg: Color::Rgb(0xd3, 0x86, 0x9b),
        button_fg: Color::Rgb(0x28, 0x28, 0x28),
        status_bg: Color::Rgb(0x45, 0x40, 0x3d),
        status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        error: Color::Rgb(0xea, 0x69, 0x62),
        success: Color::Rgb(0xa9, 0xb6, 0x65),
    }
}
