use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::text::display_width;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match &app.mode {
            Mode::Browse => "BROWSE",
            Mode::Editing(_) => "EDIT",
            Mode::Alert(_) => "ALERT",
            Mode::Help => "HELP",
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " {} | {} | {}/{}",
                mode_str,
                app.current_section(),
                app.offset(),
                app.max_offset()
            ),
        };

        let help_hint = match &app.mode {
            Mode::Editing(_) => " Esc/Enter:done Tab:next field ",
            Mode::Alert(_) | Mode::Help => " Enter:close ",
            Mode::Browse => " q:quit j/k:scroll Tab:focus p/c:sections ?:help ",
        };
        let padding_len = (area.width as usize)
            .saturating_sub(display_width(&status_text) + display_width(help_hint));

        let line = Line::from(vec![
            Span::styled(status_text, theme.status()),
            Span::styled(" ".repeat(padding_len), theme.status()),
            Span::styled(help_hint, theme.status().fg(theme.muted)),
        ]);

        frame.render_widget(Paragraph::new(line).style(theme.status()), area);
    }
}
