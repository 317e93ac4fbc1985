use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::contact::Field;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextFocus,
    PrevFocus,
    /// Follow the focused link, edit the focused field or submit
    Activate,
    GotoProjects,
    GotoContact,
    Help,
    ExitMode,
    // Field editing
    InputChar(char),
    Backspace,
    NextChoice,
    PrevChoice,
    None,
}

/// Map a key event to an action for the current mode
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match &app.mode {
        Mode::Help => return Action::ExitMode,
        Mode::Alert(_) => return handle_alert_mode(key),
        Mode::Editing(field) => return handle_editing_mode(key, *field),
        Mode::Browse => {}
    }

    let binding = KeyBinding::from(key);
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap.get_pending_g_action().copied().unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    keymap.lookup(key).unwrap_or(Action::None)
}

/// Any dismiss key closes the alert
fn handle_alert_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => Action::ExitMode,
        _ => Action::None,
    }
}

fn handle_editing_mode(key: KeyEvent, field: Field) -> Action {
    match key.code {
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Tab => Action::NextFocus,
        KeyCode::BackTab => Action::PrevFocus,
        KeyCode::Enter if field == Field::Comment && key.modifiers.contains(KeyModifiers::ALT) => {
            Action::InputChar('\n')
        }
        KeyCode::Enter => Action::ExitMode,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Left | KeyCode::Up if !field.is_text() => Action::PrevChoice,
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') if !field.is_text() => {
            Action::NextChoice
        }
        KeyCode::Char(c) if field.is_text() => Action::InputChar(c),
        _ => Action::None,
    }
}
