//! Page composition: where each section and control sits on the page
//!
//! The page is one tall canvas; the viewport shows a window of it. All
//! rows here are page rows (0 = top of the landing section).

use folio_core::contact::Field;
use folio_core::content::{Project, CONTACT_SECTION, LANDING_SECTION, PROJECTS_SECTION};
use folio_core::nav::{AnchorTarget, ScrollOffset};
use folio_core::Portfolio;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::header::HEADER_HEIGHT;
use crate::text::wrap_text;

/// Horizontal margin inside sections
pub const MARGIN_X: u16 = 2;
/// Gap between card columns
const CARD_GAP: u16 = 2;
/// Minimum page width for a two column card grid
const TWO_COLUMN_WIDTH: u16 = 72;
/// First card row, relative to the projects section
const CARDS_TOP: u16 = 3;
/// Widest the contact form grows
const FORM_MAX_WIDTH: u16 = 80;
/// First field, relative to the contact section
const FIELDS_TOP: u16 = 3;

/// A section's vertical extent on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: &'static str,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

/// Project card position, relative to the projects section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub rect: Rect,
}

/// Contact form field position, relative to the contact section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub field: Field,
    /// Label row
    pub top: u16,
    /// Input box height including borders
    pub box_height: u16,
}

impl FieldSlot {
    pub fn box_top(&self) -> u16 {
        self.top + 1
    }

    pub fn error_row(&self) -> u16 {
        self.box_top() + self.box_height
    }

    /// Label + box + error line
    pub fn height(&self) -> u16 {
        self.box_height + 2
    }
}

/// Input box height for a field
pub fn box_height(field: Field) -> u16 {
    match field {
        Field::Comment => 6,
        _ => 3,
    }
}

/// All contact fields, top to bottom
pub fn field_slots() -> Vec<FieldSlot> {
    let mut top = FIELDS_TOP;
    Field::ALL
        .iter()
        .map(|&field| {
            let slot = FieldSlot {
                field,
                top,
                box_height: box_height(field),
            };
            top += slot.height();
            slot
        })
        .collect()
}

/// Submit button row, relative to the contact section
pub fn submit_top() -> u16 {
    field_slots().last().map(|s| s.top + s.height()).unwrap_or(FIELDS_TOP)
}

pub const SUBMIT_HEIGHT: u16 = 3;

/// Contact section height
pub fn contact_height() -> u16 {
    submit_top() + SUBMIT_HEIGHT + 1
}

/// Contact form width for a page width
pub fn form_width(width: u16) -> u16 {
    width.saturating_sub(MARGIN_X * 2).min(FORM_MAX_WIDTH)
}

/// Rows used by the landing hero content (avatar, greeting, bio)
pub fn landing_content_height(portfolio: &Portfolio) -> u16 {
    3 + 1 + 1 + 1 + portfolio.profile.bio.len() as u16
}

/// Card width for a page width and column count
fn card_width(width: u16, columns: u16) -> u16 {
    let usable = width.saturating_sub(MARGIN_X * 2);
    (usable.saturating_sub(CARD_GAP * (columns - 1)) / columns).max(8)
}

/// Width available for card text (border + one cell padding each side)
pub fn card_text_width(card_width: u16) -> u16 {
    card_width.saturating_sub(4).max(1)
}

/// Card height: borders, image line, title, description, "See more"
pub fn card_height(project: &Project, card_width: u16) -> u16 {
    2 + 1 + 1 + wrap_text(&project.description, card_text_width(card_width)).len() as u16 + 1
}

/// Lay out project cards; returns the slots and the section height
pub fn project_grid(projects: &[Project], width: u16) -> (Vec<CardSlot>, u16) {
    let columns = if width >= TWO_COLUMN_WIDTH { 2 } else { 1 };
    let card_w = card_width(width, columns);

    let mut slots = Vec::with_capacity(projects.len());
    let mut y = CARDS_TOP;
    for (row, chunk) in projects.chunks(columns as usize).enumerate() {
        let row_height = chunk
            .iter()
            .map(|p| card_height(p, card_w))
            .max()
            .unwrap_or(0);
        for (col, _) in chunk.iter().enumerate() {
            let index = row * columns as usize + col;
            let x = MARGIN_X + col as u16 * (card_w + CARD_GAP);
            slots.push(CardSlot {
                index,
                rect: Rect::new(x, y, card_w, row_height),
            });
        }
        y += row_height + 1;
    }

    (slots, y + 1)
}

/// Computed page geometry for one terminal size
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: u16,
    pub sections: Vec<SectionSpan>,
    pub cards: Vec<CardSlot>,
    pub total_height: u16,
}

impl PageLayout {
    pub fn compute(portfolio: &Portfolio, width: u16, viewport_height: u16) -> Self {
        let landing_height =
            viewport_height.max(HEADER_HEIGHT + landing_content_height(portfolio) + 1);
        let (cards, projects_height) = project_grid(&portfolio.projects, width);

        let mut sections = Vec::with_capacity(3);
        let mut top = 0;
        for (id, height) in [
            (LANDING_SECTION, landing_height),
            (PROJECTS_SECTION, projects_height),
            (CONTACT_SECTION, contact_height()),
        ] {
            sections.push(SectionSpan { id, top, height });
            top += height;
        }

        debug!(width, viewport_height, total_height = top, "page layout computed");
        Self {
            width,
            viewport_height,
            sections,
            cards,
            total_height: top,
        }
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_offset(&self) -> ScrollOffset {
        self.total_height.saturating_sub(self.viewport_height)
    }

    pub fn section(&self, id: &str) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section covering page row `row`
    pub fn section_at(&self, row: u16) -> Option<&SectionSpan> {
        self.sections
            .iter()
            .find(|s| row >= s.top && row < s.bottom())
            .or_else(|| self.sections.last())
    }

    /// Page rows (top, height) of a card
    pub fn card_rows(&self, index: usize) -> Option<(u16, u16)> {
        let projects = self.section(PROJECTS_SECTION)?;
        let slot = self.cards.iter().find(|c| c.index == index)?;
        Some((projects.top + slot.rect.y, slot.rect.height))
    }

    /// Page rows (top, height) of a form field
    pub fn field_rows(&self, field: Field) -> Option<(u16, u16)> {
        let contact = self.section(CONTACT_SECTION)?;
        let slot = field_slots().into_iter().find(|s| s.field == field)?;
        Some((contact.top + slot.top, slot.height()))
    }

    /// Page rows (top, height) of the submit button
    pub fn submit_rows(&self) -> Option<(u16, u16)> {
        let contact = self.section(CONTACT_SECTION)?;
        Some((contact.top + submit_top(), SUBMIT_HEIGHT))
    }
}

/// Request for the render loop to animate the page to an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: ScrollOffset,
}

/// Anchor for a page section; scrolling into view posts a request to the
/// render loop, which animates toward it
#[derive(Debug, Clone)]
pub struct SectionAnchor {
    top: ScrollOffset,
    requests: UnboundedSender<ScrollRequest>,
}

impl SectionAnchor {
    pub fn new(top: ScrollOffset, requests: UnboundedSender<ScrollRequest>) -> Self {
        Self { top, requests }
    }

    pub fn top(&self) -> ScrollOffset {
        self.top
    }
}

impl AnchorTarget for SectionAnchor {
    fn scroll_into_view(&self) {
        if self.requests.send(ScrollRequest { top: self.top }).is_err() {
            debug!(top = self.top, "scroll request dropped, render loop gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_sections_stack() {
        let portfolio = Portfolio::default();
        let layout = PageLayout::compute(&portfolio, 100, 30);

        let ids: Vec<_> = layout.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["landing", "projects", "contactme"]);
        assert_eq!(layout.sections[0].top, 0);
        assert_eq!(layout.sections[0].height, 30);
        assert_eq!(layout.sections[1].top, 30);
        assert_eq!(layout.sections[2].top, layout.sections[1].bottom());
        assert_eq!(layout.total_height, layout.sections[2].bottom());
        assert_eq!(layout.max_offset(), layout.total_height - 30);
    }

    #[test]
    fn test_tiny_viewport_fits_hero() {
        let portfolio = Portfolio::default();
        let layout = PageLayout::compute(&portfolio, 100, 4);
        assert_eq!(
            layout.sections[0].height,
            HEADER_HEIGHT + landing_content_height(&portfolio) + 1
        );
    }

    #[test]
    fn test_card_grid_columns() {
        let portfolio = Portfolio::default();

        let (wide, _) = project_grid(&portfolio.projects, 100);
        assert_eq!(wide[0].rect.y, wide[1].rect.y);
        assert!(wide[1].rect.x > wide[0].rect.x);

        let (narrow, _) = project_grid(&portfolio.projects, 50);
        assert!(narrow[1].rect.y > narrow[0].rect.y);
        assert_eq!(narrow[1].rect.x, narrow[0].rect.x);
    }

    #[test]
    fn test_field_slots_do_not_overlap() {
        let slots = field_slots();
        assert_eq!(slots.len(), 4);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].top + pair[0].height(), pair[1].top);
        }
        assert_eq!(submit_top(), slots[3].top + slots[3].height());
        assert_eq!(contact_height(), submit_top() + SUBMIT_HEIGHT + 1);
    }

    #[test]
    fn test_section_at() {
        let layout = PageLayout::compute(&Portfolio::default(), 100, 30);
        assert_eq!(layout.section_at(0).unwrap().id, "landing");
        assert_eq!(layout.section_at(30).unwrap().id, "projects");
        assert_eq!(layout.section_at(u16::MAX).unwrap().id, "contactme");
    }

    #[test]
    fn test_anchor_posts_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let anchor = SectionAnchor::new(42, tx);

        anchor.scroll_into_view();
        assert_eq!(rx.try_recv().unwrap(), ScrollRequest { top: 42 });
        assert!(rx.try_recv().is_err());
    }
}
