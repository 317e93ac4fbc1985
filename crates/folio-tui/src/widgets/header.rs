use folio_core::Portfolio;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};

use super::{blit, put_str};
use crate::app::{App, FocusTarget};
use crate::header::HEADER_HEIGHT;
use crate::page::MARGIN_X;
use crate::text::display_width;

/// Header row holding the links
const LINK_ROW: u16 = 1;
const LINK_GAP: u16 = 3;

/// Clickable link position within the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLink {
    pub target: FocusTarget,
    pub label: String,
    pub rect: Rect,
}

/// Social links on the left, section links on the right
pub fn header_links(portfolio: &Portfolio, width: u16) -> Vec<HeaderLink> {
    let mut links = Vec::with_capacity(portfolio.socials.len() + portfolio.nav.len());

    let mut x = MARGIN_X;
    for (i, social) in portfolio.socials.iter().enumerate() {
        let w = display_width(&social.label) as u16;
        links.push(HeaderLink {
            target: FocusTarget::Social(i),
            label: social.label.clone(),
            rect: Rect::new(x, LINK_ROW, w, 1),
        });
        x += w + LINK_GAP;
    }
    let socials_end = x;

    let nav_width: u16 = portfolio
        .nav
        .iter()
        .map(|n| display_width(&n.label) as u16)
        .sum::<u16>()
        + LINK_GAP * (portfolio.nav.len().saturating_sub(1) as u16);
    let mut x = width
        .saturating_sub(MARGIN_X + nav_width)
        .max(socials_end);
    for (i, link) in portfolio.nav.iter().enumerate() {
        let w = display_width(&link.label) as u16;
        links.push(HeaderLink {
            target: FocusTarget::Nav(i),
            label: link.label.clone(),
            rect: Rect::new(x, LINK_ROW, w, 1),
        });
        x += w + LINK_GAP;
    }

    links
}

/// Fixed header, drawn over the page and shifted by its slide offset
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let visible = app.header_rows_visible().min(area.height);
        if visible == 0 {
            return;
        }

        let mut header = Buffer::empty(Rect::new(0, 0, area.width, HEADER_HEIGHT));
        Self::draw(&mut header, app);
        blit(
            &header,
            HEADER_HEIGHT.saturating_sub(visible),
            frame.buffer_mut(),
            Rect::new(area.x, area.y, area.width, visible),
        );
    }

    fn draw(buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        buf.set_style(buf.area, theme.header());

        for link in header_links(&app.portfolio, buf.area.width) {
            let style = if app.focus == Some(link.target) {
                theme.header().patch(theme.focused())
            } else {
                theme.header()
            };
            put_str(buf, link.rect.x, link.rect.y, &link.label, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_split_left_and_right() {
        let portfolio = Portfolio::default();
        let links = header_links(&portfolio, 120);

        assert_eq!(links.len(), 6);
        assert_eq!(links[0].target, FocusTarget::Social(0));
        assert_eq!(links[0].rect.x, MARGIN_X);

        let last = links.last().unwrap();
        assert_eq!(last.target, FocusTarget::Nav(1));
        assert_eq!(last.label, "Contact Me");
        assert_eq!(last.rect.right(), 120 - MARGIN_X);
    }

    #[test]
    fn test_narrow_header_never_overlaps() {
        let portfolio = Portfolio::default();
        let links = header_links(&portfolio, 30);
        for pair in links.windows(2) {
            assert!(pair[0].rect.right() <= pair[1].rect.x);
        }
    }
}
