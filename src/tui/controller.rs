use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.help_open() {
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.verdict().is_some() {
        let _ = app.handle_input(InputAction::DismissVerdict);
        return false;
    }
    if app.name_entry_active() {
        let action = match code {
            KeyCode::Enter => Some(InputAction::NameSubmit),
            KeyCode::Esc => Some(InputAction::NameCancel),
            KeyCode::Backspace => Some(InputAction::NameBackspace),
            KeyCode::Char(c) => Some(InputAction::NameChar(c)),
            _ => None,
        };
        if let Some(action) = action {
            let _ = app.handle_input(action);
        }
        return false;
    }

    let action = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Tab => InputAction::SlotNext,
        KeyCode::BackTab => InputAction::SlotPrev,
        KeyCode::Up => InputAction::CursorUp,
        KeyCode::Down => InputAction::CursorDown,
        KeyCode::Left => InputAction::CursorLeft,
        KeyCode::Right => InputAction::CursorRight,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::PlaceCard,
        KeyCode::Backspace | KeyCode::Delete => InputAction::ClearSlot,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::RandomizeHand,
        KeyCode::Char('x') | KeyCode::Char('X') => InputAction::ResetHand,
        KeyCode::Char('n') | KeyCode::Char('N') => InputAction::NameOpen,
        KeyCode::Char('e') | KeyCode::Char('E') => InputAction::Evaluate,
        KeyCode::Char(c @ '1'..='5') => InputAction::SlotSelect((c as u8 - b'1') as usize),
        _ => return false,
    };
    let _ = app.handle_input(action);
    false
}
