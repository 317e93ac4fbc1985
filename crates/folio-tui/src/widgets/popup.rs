use folio_core::config::KeymapConfig;
use folio_core::contact::SubmitOutcome;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::text::wrap_text;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Submission result dialog
    pub fn render_alert(frame: &mut Frame, outcome: &SubmitOutcome, theme: &Theme) {
        let area = frame.area();
        let (title, accent) = if outcome.is_success() {
            ("All good!", theme.success)
        } else {
            ("Oops!", theme.error)
        };

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let message = wrap_text(outcome.message(), popup_width.saturating_sub(4));
        let popup_height = (message.len() as u16 + 5).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .style(Style::default().fg(theme.card_fg).bg(theme.card_bg));

        let mut lines: Vec<Line> = vec![Line::default()];
        lines.extend(message.into_iter().map(|l| {
            Line::from(Span::styled(l, Style::default().add_modifier(Modifier::BOLD)))
        }));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[", Style::default().fg(theme.muted)),
            Span::styled("Enter", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            Span::styled("] close", Style::default().fg(theme.muted)),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, popup_area);
    }

    /// Key binding overview
    pub fn render_help(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let entries = [
            (keymap.scroll_down.as_str(), "scroll down"),
            (keymap.scroll_up.as_str(), "scroll up"),
            (keymap.scroll_half_down.as_str(), "half page down"),
            (keymap.scroll_half_up.as_str(), "half page up"),
            (keymap.scroll_page_down.as_str(), "page down"),
            (keymap.scroll_page_up.as_str(), "page up"),
            (keymap.jump_to_top.as_str(), "top of page"),
            (keymap.jump_to_bottom.as_str(), "bottom of page"),
            (keymap.next_focus.as_str(), "next link or field"),
            (keymap.prev_focus.as_str(), "previous link or field"),
            (keymap.activate.as_str(), "follow link / edit / submit"),
            (keymap.goto_projects.as_str(), "go to projects"),
            (keymap.goto_contact.as_str(), "go to contact form"),
            (keymap.quit.as_str(), "quit"),
        ];

        let area = frame.area();
        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.link_focus))
            .style(Style::default().fg(theme.card_fg).bg(theme.card_bg));

        let mut lines: Vec<Line> = entries
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>8}  ", key),
                        Style::default()
                            .fg(theme.link_focus)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*what),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " any key to close",
            Style::default().fg(theme.muted),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Rect of `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
        assert_eq!(centered_rect(200, 10, area), Rect::new(0, 15, 100, 10));
    }
}
