use folio_core::contact::Field;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

use super::{put_centered, put_str};
use crate::app::{App, FocusTarget, Mode};
use crate::page::{field_slots, form_width, submit_top, FieldSlot, MARGIN_X, SUBMIT_HEIGHT};
use crate::text::{fit_tail, wrap_text};

const CURSOR: &str = "▌";

/// Contact form section
pub struct ContactWidget;

impl ContactWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().fg(theme.contact_fg).bg(theme.contact_bg);
        buf.set_style(area, base);

        let x = area.x + MARGIN_X;
        let width = form_width(area.width);

        put_str(buf, x, area.y + 1, "Contact me", base.add_modifier(Modifier::BOLD));

        for slot in field_slots() {
            Self::render_field(buf, area, x, width, &slot, app);
        }

        let focused = app.focus == Some(FocusTarget::Submit);
        let button = Style::default().fg(theme.button_fg).bg(theme.button_bg);
        let rect = Rect::new(x, area.y + submit_top(), width, SUBMIT_HEIGHT);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if focused { button.fg(theme.link_focus) } else { button })
            .style(button)
            .render(rect, buf);
        let label = if app.submitting { "Sending..." } else { "Submit" };
        let label_style = if focused {
            button.add_modifier(Modifier::BOLD)
        } else {
            button
        };
        put_centered(buf, rect, rect.y + 1, label, label_style);
    }

    fn render_field(buf: &mut Buffer, area: Rect, x: u16, width: u16, slot: &FieldSlot, app: &App) {
        let theme = &app.theme;
        let field = slot.field;
        let base = Style::default().fg(theme.contact_fg).bg(theme.contact_bg);
        let editing = app.mode == Mode::Editing(field);
        let focused = app.focus == Some(FocusTarget::Field(field));
        let error = app.form.visible_error(field);

        put_str(buf, x, area.y + slot.top, field.label(), base);

        let input = Style::default().fg(theme.input_fg).bg(theme.input_bg);
        let border = if editing {
            input.fg(theme.input_focus)
        } else if focused {
            input.fg(theme.link_focus)
        } else if error.is_some() {
            input.fg(theme.error)
        } else {
            input.fg(theme.input_border)
        };
        let rect = Rect::new(x, area.y + slot.box_top(), width, slot.box_height);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(input)
            .render(rect, buf);

        let inner_x = rect.x + 1;
        let inner_width = rect.width.saturating_sub(2);
        let rows = slot.box_height.saturating_sub(2);
        let values = app.form.values();

        match values.text(field) {
            Some(text) => {
                let cursor = if editing { CURSOR } else { "" };
                let lines = if field == Field::Comment {
                    // Leave room for the cursor on the last line
                    wrap_text(text, inner_width.saturating_sub(1))
                } else {
                    vec![fit_tail(text, inner_width.saturating_sub(1) as usize).to_string()]
                };
                let skip = lines.len().saturating_sub(rows as usize);
                let shown = &lines[skip..];
                for (i, line) in shown.iter().enumerate() {
                    let mut line = line.clone();
                    if i + 1 == shown.len() {
                        line.push_str(cursor);
                    }
                    put_str(buf, inner_x, rect.y + 1 + i as u16, &line, input);
                }
            }
            None => {
                let choice = values.enquiry.label();
                let text = if editing {
                    format!("‹ {} ›", choice)
                } else {
                    format!("{} ▾", choice)
                };
                put_str(buf, inner_x, rect.y + 1, &text, input);
            }
        }

        if let Some(message) = error {
            put_str(buf, x, area.y + slot.error_row(), message, base.fg(theme.error));
        }
    }
}
