use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

use super::put_str;
use crate::app::{App, FocusTarget};
use crate::page::{card_text_width, MARGIN_X};
use crate::text::{truncate, wrap_text};

/// Project showcase: heading plus a grid of cards
pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().fg(theme.projects_fg).bg(theme.projects_bg);
        buf.set_style(area, base);

        put_str(
            buf,
            area.x + MARGIN_X,
            area.y + 1,
            "Featured Projects",
            base.add_modifier(Modifier::BOLD),
        );

        for slot in &app.layout.cards {
            let Some(project) = app.portfolio.projects.get(slot.index) else {
                continue;
            };
            let rect = Rect::new(
                area.x + slot.rect.x,
                area.y + slot.rect.y,
                slot.rect.width,
                slot.rect.height,
            );
            let focused = app.focus == Some(FocusTarget::Card(slot.index));
            let card = Style::default().fg(theme.card_fg).bg(theme.card_bg);
            let border = if focused {
                card.fg(theme.link_focus)
            } else {
                card.fg(theme.card_muted)
            };
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border)
                .style(card)
                .render(rect, buf);

            let x = rect.x + 2;
            let width = card_text_width(rect.width);
            let mut y = rect.y + 1;

            let image = project
                .image_src
                .as_deref()
                .and_then(|src| src.rsplit('/').next())
                .filter(|name| !name.is_empty())
                .unwrap_or("no image");
            put_str(
                buf,
                x,
                y,
                &truncate(&format!("▣ {}", image), width as usize),
                card.fg(theme.card_muted),
            );
            y += 1;

            put_str(
                buf,
                x,
                y,
                &truncate(&project.title, width as usize),
                card.add_modifier(Modifier::BOLD),
            );
            y += 1;

            for line in wrap_text(&project.description, width) {
                put_str(buf, x, y, &line, card.fg(theme.card_muted));
                y += 1;
            }

            let link_style = if focused {
                card.patch(theme.focused())
            } else {
                card.add_modifier(Modifier::UNDERLINED)
            };
            put_str(buf, x, rect.bottom().saturating_sub(2), "See more →", link_style);
        }
    }
}
