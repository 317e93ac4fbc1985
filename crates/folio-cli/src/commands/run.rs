use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{error, info};

use folio_core::contact::{send, ContactValues, HttpSubmitter, SubmitOutcome, Submitter};
use folio_core::content::{CONTACT_SECTION, PROJECTS_SECTION};
use folio_core::{AppConfig, Portfolio};
use folio_tui::{
    app::{App, Mode, STATUS_BAR_HEIGHT},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    scroll::ScrollConfigExt,
    widgets::{HeaderWidget, PageWidget, PopupWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let portfolio = Portfolio::for_config(&config)?;
    let submitter: Arc<dyn Submitter> = Arc::new(HttpSubmitter::new(&config.contact)?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(format!("{} | Portfolio", portfolio.profile.name))
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, portfolio, keymap, submitter);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("TUI exited with error: {:#}", e);
    }
    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    config: Arc<AppConfig>,
    portfolio: Portfolio,
    keymap: Keymap,
    submitter: Arc<dyn Submitter>,
) -> Result<()> {
    let size = terminal.size()?;
    let theme = load_theme(&config.ui.theme);
    let event_handler = EventHandler::with_animation_rate(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_tick_duration(),
    );
    let mut app = App::new(config, portfolio, theme, size.width, size.height);
    info!(width = size.width, height = size.height, "TUI started");

    // Completed submissions come back over this channel
    let (submit_tx, mut submit_rx) = mpsc::unbounded_channel::<SubmitOutcome>();

    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        while let Ok(outcome) = submit_rx.try_recv() {
            info!(success = outcome.is_success(), "submission finished");
            app.finish_submission(outcome);
        }

        app.tick();
        terminal.draw(|frame| draw(frame, &app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action, &submitter, &submit_tx);
                }
                AppEvent::Mouse(mouse) => handle_mouse(&mut app, mouse, &submitter, &submit_tx),
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    app.shutdown();
    info!("TUI stopped");
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .split(frame.area());

    PageWidget::render(frame, chunks[0], app);
    HeaderWidget::render(frame, chunks[0], app);
    StatusBarWidget::render(frame, chunks[1], app);

    match &app.mode {
        Mode::Alert(outcome) => PopupWidget::render_alert(frame, outcome, &app.theme),
        Mode::Help => PopupWidget::render_help(frame, &app.config.keymap, &app.theme),
        Mode::Browse | Mode::Editing(_) => {}
    }
}

fn handle_action(
    app: &mut App,
    action: Action,
    submitter: &Arc<dyn Submitter>,
    submit_tx: &mpsc::UnboundedSender<SubmitOutcome>,
) {
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None && !app.submitting {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::ScrollPageDown => app.scroll_page_down(),
        Action::ScrollPageUp => app.scroll_page_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::NextFocus => {
            app.stop_editing();
            app.focus_next();
        }
        Action::PrevFocus => {
            app.stop_editing();
            app.focus_prev();
        }
        Action::Activate => {
            if let Some(values) = app.activate_focus() {
                spawn_submission(submitter.clone(), values, submit_tx.clone());
            }
        }
        Action::GotoProjects => {
            app.navigate(PROJECTS_SECTION);
        }
        Action::GotoContact => {
            app.navigate(CONTACT_SECTION);
        }
        Action::Help => app.show_help(),
        Action::ExitMode => app.exit_mode(),
        Action::InputChar(c) => app.input_char(c),
        Action::Backspace => app.backspace(),
        Action::NextChoice => app.next_choice(),
        Action::PrevChoice => app.prev_choice(),
        Action::None => {}
    }
}

fn handle_mouse(
    app: &mut App,
    mouse: MouseEvent,
    submitter: &Arc<dyn Submitter>,
    submit_tx: &mpsc::UnboundedSender<SubmitOutcome>,
) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.wheel_down(),
        MouseEventKind::ScrollUp => app.wheel_up(),
        MouseEventKind::Down(MouseButton::Left) => {
            if matches!(app.mode, Mode::Alert(_) | Mode::Help) {
                app.exit_mode();
                return;
            }
            app.stop_editing();
            if mouse.row < app.viewport_height() && app.focus_at(mouse.column, mouse.row) {
                handle_action(app, Action::Activate, submitter, submit_tx);
            }
        }
        _ => {}
    }
}

/// Send the form in the background; the outcome is picked up by the loop
fn spawn_submission(
    submitter: Arc<dyn Submitter>,
    values: ContactValues,
    tx: mpsc::UnboundedSender<SubmitOutcome>,
) {
    tokio::spawn(async move {
        let outcome = send(submitter.as_ref(), &values).await;
        let _ = tx.send(outcome);
    });
}
