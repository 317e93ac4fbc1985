use folio_core::content::{CONTACT_SECTION, LANDING_SECTION, PROJECTS_SECTION};
use ratatui::{buffer::Buffer, layout::Rect, Frame};

use super::{blit, ContactWidget, LandingWidget, ProjectsWidget};
use crate::app::App;

/// Scrolling page body
///
/// Every section is drawn onto one page-sized canvas; the rows under the
/// viewport are then copied into the frame.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let page = Self::draw_page(app);
        blit(&page, app.offset(), frame.buffer_mut(), area);
    }

    /// Draw the whole page, top to bottom
    pub fn draw_page(app: &App) -> Buffer {
        let layout = &app.layout;
        let mut page = Buffer::empty(Rect::new(0, 0, layout.width, layout.total_height.max(1)));

        for span in &layout.sections {
            let area = Rect::new(0, span.top, layout.width, span.height);
            match span.id {
                LANDING_SECTION => LandingWidget::render(&mut page, area, app),
                PROJECTS_SECTION => ProjectsWidget::render(&mut page, area, app),
                CONTACT_SECTION => ContactWidget::render(&mut page, area, app),
                _ => {}
            }
        }
        page
    }
}
