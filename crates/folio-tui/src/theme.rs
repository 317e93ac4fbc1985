use ratatui::style::{Color, Modifier, Style};

/// Colors for each page surface
#[derive(Debug, Clone)]
pub struct Theme {
    // Fixed header
    pub header_bg: Color,
    pub header_fg: Color,
    pub link_focus: Color,

    // Sections
    pub landing_bg: Color,
    pub landing_fg: Color,
    pub projects_bg: Color,
    pub projects_fg: Color,
    pub contact_bg: Color,
    pub contact_fg: Color,

    // Project cards
    pub card_bg: Color,
    pub card_fg: Color,
    pub card_muted: Color,

    // Form controls
    pub input_bg: Color,
    pub input_fg: Color,
    pub input_border: Color,
    pub input_focus: Color,
    pub button_bg: Color,
    pub button_fg: Color,

    // Status and feedback
    pub status_bg: Color,
    pub status_fg: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::portfolio()
    }
}

impl Theme {
    pub fn header(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    /// Focused link or control
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.link_focus)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn status(&self) -> Style {
        Style::default().fg(self.status_fg).bg(self.status_bg)
    }
}
