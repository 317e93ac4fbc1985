use std::sync::Arc;

use folio_core::contact::{ContactForm, ContactValues, Field, SubmitOutcome, ValidationRules};
use folio_core::content::PAGE_SECTIONS;
use folio_core::nav::{Activation, NavigationController, ScrollOffset, Viewport, Visibility};
use folio_core::{AppConfig, Portfolio};
use ratatui::layout::Position;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::header::{HeaderSlide, HEADER_HEIGHT};
use crate::page::{PageLayout, ScrollRequest, SectionAnchor};
use crate::scroll::SmoothScroller;
use crate::theme::Theme;
use crate::widgets::header_links;

/// Rows reserved below the page for the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows a mouse wheel notch scrolls
const WHEEL_STEP: i32 = 3;

/// Something on the page that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Social link in the header
    Social(usize),
    /// Section link in the header
    Nav(usize),
    /// Project card ("See more")
    Card(usize),
    Field(Field),
    Submit,
}

/// Application mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling and following links
    Browse,
    /// Typing into a form field
    Editing(Field),
    /// Submission result dialog
    Alert(SubmitOutcome),
    Help,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub portfolio: Portfolio,
    pub theme: Theme,
    pub layout: PageLayout,
    /// Page scroll position, observed by the navigation controller
    pub viewport: Viewport,
    pub nav: NavigationController<HeaderSlide, SectionAnchor>,
    pub scroller: SmoothScroller,
    scroll_tx: UnboundedSender<ScrollRequest>,
    scroll_rx: UnboundedReceiver<ScrollRequest>,
    pub form: ContactForm,
    pub focus: Option<FocusTarget>,
    pub mode: Mode,
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// A submission is in flight
    pub submitting: bool,
    pub should_quit: bool,
}

impl App {
    /// Build the page for a terminal of `width` x `height` and mount
    /// navigation on it
    pub fn new(
        config: Arc<AppConfig>,
        portfolio: Portfolio,
        theme: Theme,
        width: u16,
        height: u16,
    ) -> Self {
        let viewport_height = height.saturating_sub(STATUS_BAR_HEIGHT);
        let layout = PageLayout::compute(&portfolio, width, viewport_height);
        let mut viewport = Viewport::new(layout.max_offset());
        let (scroll_tx, scroll_rx) = mpsc::unbounded_channel();

        let header = HeaderSlide::new(&config.ui.header);
        let mut nav = NavigationController::new(header, hide_offset(config.ui.header.hide_offset));
        for span in &layout.sections {
            nav.register(span.id, SectionAnchor::new(span.top, scroll_tx.clone()));
        }
        nav.mount(&mut viewport);

        let form = ContactForm::new(ValidationRules::from(&config.contact));
        let scroller = SmoothScroller::new(config.ui.scroll.clone());

        info!(sections = layout.sections.len(), "page composed");
        Self {
            config,
            portfolio,
            theme,
            layout,
            viewport,
            nav,
            scroller,
            scroll_tx,
            scroll_rx,
            form,
            focus: None,
            mode: Mode::Browse,
            status_message: None,
            pending_key: None,
            submitting: false,
            should_quit: false,
        }
    }

    pub fn viewport_height(&self) -> u16 {
        self.layout.viewport_height
    }

    pub fn max_offset(&self) -> ScrollOffset {
        self.layout.max_offset()
    }

    /// Current page offset as seen by the viewport
    pub fn offset(&self) -> ScrollOffset {
        self.viewport.offset()
    }

    /// Recompute the page for a new terminal size and move the anchors
    pub fn resize(&mut self, width: u16, height: u16) {
        let viewport_height = height.saturating_sub(STATUS_BAR_HEIGHT);
        self.layout = PageLayout::compute(&self.portfolio, width, viewport_height);

        for span in &self.layout.sections {
            self.nav
                .register(span.id, SectionAnchor::new(span.top, self.scroll_tx.clone()));
        }

        let max = self.layout.max_offset();
        if self.scroller.target() > max {
            self.scroller.scroll_to(max, max);
        }
        self.viewport.set_max_offset(max);
        debug!(width, height, max, "page resized");
    }

    /// Advance animations by one frame
    pub fn tick(&mut self) {
        self.drain_scroll_requests();
        let offset = self.scroller.update(self.max_offset());
        self.viewport.scroll_to(offset);
        self.nav.with_header_mut(|header| header.update());
    }

    /// Whether the loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroller.needs_update() || self.nav.with_header(|header| header.is_animating())
    }

    /// Header offset to draw at (0 = fully visible)
    pub fn header_offset(&self) -> i16 {
        self.nav.with_header(|header| header.offset())
    }

    pub fn header_visibility(&self) -> Visibility {
        self.nav.visibility()
    }

    /// Rows of the header currently on screen
    pub fn header_rows_visible(&self) -> u16 {
        HEADER_HEIGHT
            .saturating_add_signed(self.header_offset())
            .min(HEADER_HEIGHT)
    }

    /// Hand queued anchor requests to the scroller; the last one wins
    fn drain_scroll_requests(&mut self) {
        let max = self.max_offset();
        while let Ok(request) = self.scroll_rx.try_recv() {
            self.scroller.scroll_to(request.top, max);
        }
    }

    // Scrolling

    pub fn scroll_down(&mut self) {
        self.scroller.step_down(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.scroller.step_up(self.max_offset());
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroller.half_page_down(self.viewport_height(), self.max_offset());
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroller.half_page_up(self.viewport_height(), self.max_offset());
    }

    pub fn scroll_page_down(&mut self) {
        self.scroller.page_down(self.viewport_height(), self.max_offset());
    }

    pub fn scroll_page_up(&mut self) {
        self.scroller.page_up(self.viewport_height(), self.max_offset());
    }

    pub fn wheel_down(&mut self) {
        self.scroller.scroll_by(WHEEL_STEP, self.max_offset());
    }

    pub fn wheel_up(&mut self) {
        self.scroller.scroll_by(-WHEEL_STEP, self.max_offset());
    }

    pub fn jump_to_top(&mut self) {
        self.scroller.scroll_to(0, self.max_offset());
    }

    pub fn jump_to_bottom(&mut self) {
        let max = self.max_offset();
        self.scroller.scroll_to(max, max);
    }

    /// Smooth-scroll to a section through the navigation controller
    pub fn navigate(&mut self, id: &str) -> Activation {
        let activation = self.nav.activate(id);
        if activation == Activation::Unresolved {
            self.set_status(format!("No section named '{}'", id));
        }
        self.drain_scroll_requests();
        activation
    }

    // Focus ring

    fn focus_ring(&self) -> Vec<FocusTarget> {
        let mut ring = Vec::new();
        ring.extend((0..self.portfolio.socials.len()).map(FocusTarget::Social));
        ring.extend((0..self.portfolio.nav.len()).map(FocusTarget::Nav));
        ring.extend((0..self.portfolio.projects.len()).map(FocusTarget::Card));
        ring.extend(Field::ALL.iter().copied().map(FocusTarget::Field));
        ring.push(FocusTarget::Submit);
        ring
    }

    pub fn focus_next(&mut self) {
        let ring = self.focus_ring();
        let next = match self.focus.and_then(|f| ring.iter().position(|t| *t == f)) {
            Some(i) => ring[(i + 1) % ring.len()],
            None => ring[0],
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let ring = self.focus_ring();
        let prev = match self.focus.and_then(|f| ring.iter().position(|t| *t == f)) {
            Some(i) => ring[(i + ring.len() - 1) % ring.len()],
            None => ring[ring.len() - 1],
        };
        self.set_focus(prev);
    }

    /// Focus a target and bring it on screen
    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = Some(target);
        self.ensure_visible(target);
    }

    /// Page rows (top, height) of a focus target; header links have none
    fn target_rows(&self, target: FocusTarget) -> Option<(u16, u16)> {
        match target {
            FocusTarget::Social(_) | FocusTarget::Nav(_) => None,
            FocusTarget::Card(i) => self.layout.card_rows(i),
            FocusTarget::Field(field) => self.layout.field_rows(field),
            FocusTarget::Submit => self.layout.submit_rows(),
        }
    }

    fn ensure_visible(&mut self, target: FocusTarget) {
        let Some((top, height)) = self.target_rows(target) else {
            return;
        };
        let view_top = self.scroller.target();
        let view_height = self.viewport_height();
        let max = self.max_offset();

        if top < view_top + HEADER_HEIGHT {
            // Scrolling up reveals the header, keep the target below it
            self.scroller.scroll_to(top.saturating_sub(HEADER_HEIGHT), max);
        } else if top + height > view_top + view_height {
            self.scroller.scroll_to((top + height).saturating_sub(view_height), max);
        }
    }

    /// Follow the focused link or start editing the focused field.
    ///
    /// Returns the form values when a submission should be sent.
    pub fn activate_focus(&mut self) -> Option<ContactValues> {
        match self.focus? {
            FocusTarget::Social(i) => {
                let link = self.portfolio.socials.get(i)?.clone();
                self.open_url(&link.label, &link.url);
                None
            }
            FocusTarget::Nav(i) => {
                let id = self.portfolio.nav.get(i)?.id.clone();
                self.navigate(id.as_str());
                None
            }
            FocusTarget::Card(i) => {
                let project = self.portfolio.projects.get(i)?.clone();
                match &project.url {
                    Some(url) => self.open_url(&project.title, url),
                    None => self.set_status(format!("No link for {}", project.title)),
                }
                None
            }
            FocusTarget::Field(field) => {
                self.mode = Mode::Editing(field);
                None
            }
            FocusTarget::Submit => self.prepare_submission(),
        }
    }

    fn open_url(&mut self, label: &str, url: &str) {
        match open::that(url) {
            Ok(()) => self.set_status(format!("Opened {}", label)),
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.set_status(format!("Could not open {}", url));
            }
        }
    }

    /// Focus whatever sits under a screen position in the page area.
    ///
    /// Returns true when something was hit.
    pub fn focus_at(&mut self, column: u16, row: u16) -> bool {
        let header_offset = self.header_offset();
        if row < self.header_rows_visible() {
            let header_row = (row as i16 - header_offset) as u16;
            let hit = header_links(&self.portfolio, self.layout.width)
                .into_iter()
                .find(|link| link.rect.contains(Position::new(column, header_row)));
            if let Some(link) = hit {
                self.focus = Some(link.target);
                return true;
            }
            return false;
        }

        let page_row = self.offset().saturating_add(row);
        let hit = self
            .focus_ring()
            .into_iter()
            .find(|target| match self.target_rows(*target) {
                Some((top, height)) => page_row >= top && page_row < top + height,
                None => false,
            });
        match hit {
            Some(FocusTarget::Card(i)) => {
                let inside = self
                    .layout
                    .cards
                    .iter()
                    .any(|c| c.index == i && column >= c.rect.x && column < c.rect.right());
                if inside {
                    self.focus = Some(FocusTarget::Card(i));
                }
                inside
            }
            Some(target) => {
                self.focus = Some(target);
                true
            }
            None => false,
        }
    }

    // Contact form

    /// Leave editing mode, marking the field as visited
    pub fn stop_editing(&mut self) {
        if let Mode::Editing(field) = self.mode {
            self.form.touch(field);
            self.mode = Mode::Browse;
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Mode::Editing(field) = self.mode {
            self.form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Mode::Editing(field) = self.mode {
            self.form.pop_char(field);
        }
    }

    pub fn next_choice(&mut self) {
        let next = self.form.values().enquiry.next();
        self.form.set_enquiry(next);
    }

    pub fn prev_choice(&mut self) {
        let prev = self.form.values().enquiry.prev();
        self.form.set_enquiry(prev);
    }

    /// Validate the whole form; returns the payload if it may be sent
    pub fn prepare_submission(&mut self) -> Option<ContactValues> {
        if self.submitting {
            return None;
        }

        self.form.touch_all();
        if let Some(field) = self.form.errors().keys().next().copied() {
            self.set_status("Please fix the highlighted fields");
            self.set_focus(FocusTarget::Field(field));
            return None;
        }

        self.submitting = true;
        self.set_status("Sending...");
        Some(self.form.values().clone())
    }

    /// Show the submission result; a success clears the form
    pub fn finish_submission(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        self.clear_status();
        if outcome.is_success() {
            self.form.reset();
        }
        self.mode = Mode::Alert(outcome);
    }

    // Modes and status

    pub fn show_help(&mut self) {
        self.mode = Mode::Help;
    }

    /// Close a dialog or stop editing
    pub fn exit_mode(&mut self) {
        match self.mode {
            Mode::Editing(_) => self.stop_editing(),
            Mode::Alert(_) | Mode::Help => self.mode = Mode::Browse,
            Mode::Browse => self.focus = None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Section the top of the viewport is in
    pub fn current_section(&self) -> &'static str {
        let row = self.offset().saturating_add(HEADER_HEIGHT);
        self.layout
            .section_at(row)
            .map(|s| s.id)
            .unwrap_or(PAGE_SECTIONS[0])
    }

    /// Release the scroll subscription
    pub fn shutdown(&mut self) {
        if self.nav.unmount(&mut self.viewport) {
            debug!("navigation unmounted");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Keep the hidden offset between fully off screen and fully shown
fn hide_offset(configured: i16) -> i16 {
    let clamped = configured.clamp(-(HEADER_HEIGHT as i16), 0);
    if clamped != configured {
        warn!(configured, clamped, "header hide_offset out of range, clamped");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::ScrollConfig;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        config.ui.header.transition_ms = 0;
        App::new(Arc::new(config), Portfolio::default(), Theme::default(), 100, 31)
    }

    #[test]
    fn test_mounted_on_start() {
        let app = app();
        assert!(app.nav.is_mounted());
        assert_eq!(app.viewport.listener_count(), 1);
        assert_eq!(app.header_visibility(), Visibility::Shown);
        assert_eq!(app.viewport_height(), 30);
    }

    #[test]
    fn test_scrolling_hides_and_shows_header() {
        let mut app = app();

        app.scroll_page_down();
        app.tick();
        assert_eq!(app.offset(), 30);
        assert_eq!(app.header_visibility(), Visibility::Hidden);
        assert_eq!(app.header_offset(), -3);
        assert_eq!(app.header_rows_visible(), 0);

        app.scroll_up();
        app.tick();
        assert_eq!(app.header_visibility(), Visibility::Shown);
        assert_eq!(app.header_offset(), 0);
    }

    #[test]
    fn test_navigate_scrolls_to_section() {
        let mut app = app();
        let projects_top = app.layout.section("projects").unwrap().top;

        assert_eq!(app.navigate("projects"), Activation::Scrolled);
        app.tick();
        assert_eq!(app.offset(), projects_top.min(app.max_offset()));
        assert_eq!(app.current_section(), "projects");
    }

    #[test]
    fn test_navigate_unknown_section() {
        let mut app = app();
        assert_eq!(app.navigate("blog"), Activation::Unresolved);
        app.tick();
        assert_eq!(app.offset(), 0);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_focus_ring_wraps() {
        let mut app = app();
        app.focus_prev();
        assert_eq!(app.focus, Some(FocusTarget::Submit));
        app.focus_next();
        assert_eq!(app.focus, Some(FocusTarget::Social(0)));
    }

    #[test]
    fn test_focusing_field_scrolls_into_view() {
        let mut app = app();
        app.set_focus(FocusTarget::Field(Field::Comment));
        app.tick();

        let (top, height) = app.layout.field_rows(Field::Comment).unwrap();
        assert!(app.offset() <= top);
        assert!(top + height <= app.offset() + app.viewport_height());
    }

    #[test]
    fn test_invalid_submission_focuses_first_error() {
        let mut app = app();
        assert!(app.prepare_submission().is_none());
        assert_eq!(app.focus, Some(FocusTarget::Field(Field::FirstName)));
        assert!(!app.submitting);
        assert!(app.form.is_touched(Field::Email));
    }

    #[test]
    fn test_submission_round_trip() {
        let mut app = app();
        app.form.set_text(Field::FirstName, "Ada");
        app.form.set_text(Field::Email, "ada@example.com");
        app.form
            .set_text(Field::Comment, "I would like to talk about a project together.");

        let values = app.prepare_submission().expect("form is valid");
        assert_eq!(values.first_name, "Ada");
        assert!(app.submitting);
        assert!(app.prepare_submission().is_none());

        app.finish_submission(SubmitOutcome::Success {
            message: "Thanks".to_string(),
        });
        assert!(!app.submitting);
        assert!(matches!(app.mode, Mode::Alert(_)));
        assert_eq!(app.form.values().first_name, "");
    }

    #[test]
    fn test_editing_touches_on_exit() {
        let mut app = app();
        app.set_focus(FocusTarget::Field(Field::Email));
        app.activate_focus();
        assert_eq!(app.mode, Mode::Editing(Field::Email));

        app.input_char('x');
        app.exit_mode();
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.form.visible_error(Field::Email).is_some());
    }

    #[test]
    fn test_resize_moves_anchors() {
        let mut app = app();
        app.resize(50, 41);
        let projects_top = app.layout.section("projects").unwrap().top;
        assert_eq!(projects_top, 40);
        assert_eq!(app.viewport.max_offset(), app.max_offset());

        app.navigate("projects");
        app.tick();
        assert_eq!(app.offset(), projects_top.min(app.max_offset()));
    }

    #[test]
    fn test_positive_hide_offset_is_clamped() {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        config.ui.header.transition_ms = 0;
        config.ui.header.hide_offset = 2;
        let mut app = App::new(Arc::new(config), Portfolio::default(), Theme::default(), 100, 31);

        app.scroll_page_down();
        app.tick();
        assert_eq!(app.header_visibility(), Visibility::Hidden);
        assert_eq!(app.header_offset(), 0);
        assert_eq!(app.header_rows_visible(), HEADER_HEIGHT);
        assert_eq!(hide_offset(i16::MAX), 0);
        assert_eq!(hide_offset(-40), -(HEADER_HEIGHT as i16));
    }

    #[test]
    fn test_shrinking_resize_retargets_animation() {
        let mut config = AppConfig::default();
        config.ui.scroll.animation_duration_ms = 10_000;
        let mut app = App::new(Arc::new(config), Portfolio::default(), Theme::default(), 100, 31);

        app.jump_to_bottom();
        app.tick();
        assert!(app.scroller.needs_update());

        app.resize(200, 31);
        let max = app.max_offset();
        assert_eq!(app.scroller.target(), max);
        assert!(app.scroller.needs_update());
    }

    #[test]
    fn test_shutdown_releases_subscription() {
        let mut app = app();
        app.shutdown();
        assert!(!app.nav.is_mounted());
        assert_eq!(app.viewport.listener_count(), 0);
        app.shutdown();
    }
}
