mod contact;
mod header;
mod landing;
mod page;
mod popup;
mod projects;
mod status_bar;

pub use contact::ContactWidget;
pub use header::{header_links, HeaderLink, HeaderWidget};
pub use landing::LandingWidget;
pub use page::PageWidget;
pub use popup::{centered_rect, PopupWidget};
pub use projects::ProjectsWidget;
pub use status_bar::StatusBarWidget;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::text::display_width;

/// Write a string clipped to the buffer
pub(crate) fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    let area = buf.area;
    if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
        return;
    }
    buf.set_stringn(x, y, text, (area.right() - x) as usize, style);
}

/// Write a string centered horizontally in `area`
pub(crate) fn put_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let width = display_width(text) as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    put_str(buf, x, y, text, style);
}

/// Copy rows of `src`, starting at `src_top`, into `dst_area` of `dst`
pub(crate) fn blit(src: &Buffer, src_top: u16, dst: &mut Buffer, dst_area: Rect) {
    let width = dst_area.width.min(src.area.width);
    for row in 0..dst_area.height {
        let sy = src.area.y.saturating_add(src_top).saturating_add(row);
        if sy >= src.area.bottom() {
            break;
        }
        for col in 0..width {
            let from = src.cell((src.area.x + col, sy));
            let to = dst.cell_mut((dst_area.x + col, dst_area.y + row));
            if let (Some(from), Some(to)) = (from, to) {
                *to = from.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        put_str(&mut buf, 2, 0, "abcdef", Style::default());
        put_str(&mut buf, 9, 0, "x", Style::default());
        put_str(&mut buf, 0, 3, "x", Style::default());
        assert_eq!(buf, Buffer::with_lines(["  ab"]));
    }

    #[test]
    fn test_blit_window() {
        let src = Buffer::with_lines(["aaa", "bbb", "ccc", "ddd"]);
        let mut dst = Buffer::empty(Rect::new(0, 0, 3, 2));
        let area = dst.area;
        blit(&src, 1, &mut dst, area);
        assert_eq!(dst, Buffer::with_lines(["bbb", "ccc"]));
    }

    #[test]
    fn test_blit_past_end() {
        let src = Buffer::with_lines(["aaa", "bbb"]);
        let mut dst = Buffer::empty(Rect::new(0, 0, 3, 3));
        let area = dst.area;
        blit(&src, 1, &mut dst, area);
        assert_eq!(dst, Buffer::with_lines(["bbb", "   ", "   "]));
    }
}
