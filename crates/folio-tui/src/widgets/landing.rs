use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

use super::put_centered;
use crate::app::App;
use crate::header::HEADER_HEIGHT;
use crate::page::landing_content_height;

const AVATAR_WIDTH: u16 = 7;

/// Landing hero: avatar, greeting and bio, centered below the header
pub struct LandingWidget;

impl LandingWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let profile = &app.portfolio.profile;
        let base = Style::default().fg(theme.landing_fg).bg(theme.landing_bg);
        buf.set_style(area, base);

        let free = area
            .height
            .saturating_sub(HEADER_HEIGHT + landing_content_height(&app.portfolio));
        let mut y = area.y + HEADER_HEIGHT + free / 2;

        let avatar_width = AVATAR_WIDTH.min(area.width);
        let avatar = Rect::new(
            area.x + area.width.saturating_sub(avatar_width) / 2,
            y,
            avatar_width,
            3,
        );
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(base)
            .render(avatar, buf);
        let initial: String = profile.name.chars().take(1).collect();
        put_centered(buf, area, y + 1, &initial, base.add_modifier(Modifier::BOLD));
        y += 4;

        put_centered(buf, area, y, &profile.greeting, base.add_modifier(Modifier::BOLD));
        y += 2;

        for line in &profile.bio {
            put_centered(buf, area, y, line, base);
            y += 1;
        }
    }
}
