use std::io;
use std::time::Instant;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::session::{Control, Direction, Phase};
use crate::state::*;

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    // Abandon any attempt still running so its timer stops with the UI.
    state.session.go_home();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        let timeout = poll_timeout(state, Instant::now());
        if event::poll(timeout).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, state);
                }
            }
        }

        state.on_idle(Instant::now());
    }

    Ok(())
}

pub fn handle_key(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        state.should_quit = true;
        return;
    }

    if state.has_dialog() {
        handle_dialog_key(key, state);
        return;
    }

    match state.phase() {
        Phase::Welcome => handle_welcome_key(key, state),
        Phase::InProgress => handle_quiz_key(key, state),
        Phase::Finished => handle_result_key(key, state),
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    let Some(dialog) = state.top_dialog().copied() else {
        return;
    };

    match (dialog, key.code) {
        (Dialog::ConfirmSubmit, KeyCode::Enter) => {
            state.pop_dialog();
            state.control(Control::Submit);
        }
        (Dialog::ConfirmQuit, KeyCode::Enter) => {
            state.pop_dialog();
            state.should_quit = true;
        }
        (Dialog::Help, KeyCode::Enter | KeyCode::Char('?')) | (_, KeyCode::Esc) => {
            state.pop_dialog();
        }
        _ => {}
    }
}

fn handle_welcome_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => state.control(Control::Start),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Char('q') | KeyCode::Esc => state.push_dialog(Dialog::ConfirmQuit),
        _ => {}
    }
}

fn handle_quiz_key(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        if key.code == KeyCode::Char('s') {
            state.push_dialog(Dialog::ConfirmSubmit);
        }
        return;
    }

    // Letters are option keys here, so only Esc asks to quit.
    match key.code {
        KeyCode::Char(c @ 'a'..='z') => state.select(c as usize - 'a' as usize),
        KeyCode::Char(c @ '1'..='9') => state.select(c as usize - '1' as usize),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Left | KeyCode::Up => state.navigate(Direction::Previous),
        KeyCode::Right | KeyCode::Down | KeyCode::Enter => state.navigate(Direction::Next),
        KeyCode::Home => state.control(Control::Home),
        KeyCode::Esc => state.push_dialog(Dialog::ConfirmQuit),
        _ => {}
    }
}

fn handle_result_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('r') => state.control(Control::Restart),
        KeyCode::Char('h') | KeyCode::Home => state.control(Control::Home),
        KeyCode::Up => state.result_scroll = state.result_scroll.saturating_sub(1),
        KeyCode::Down => state.result_scroll += 1,
        KeyCode::PageUp => state.result_scroll = state.result_scroll.saturating_sub(5),
        KeyCode::PageDown => state.result_scroll += 5,
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Char('q') | KeyCode::Esc => state.push_dialog(Dialog::ConfirmQuit),
        _ => {}
    }
}
