use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use quizline::model::{Question, QuestionBank};
use quizline::session::{Phase, Session};
use quizline::state::{AppState, Dialog};
use quizline::tui::handle_key;

fn press(state: &mut AppState, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), state);
}

fn ctrl(state: &mut AppState, c: char) {
    handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), state);
}

fn app() -> AppState {
    let bank = QuestionBank::new(vec![
        Question {
            question: "One".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct: 1,
        },
        Question {
            question: "Two".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct: 0,
        },
    ])
    .unwrap();
    AppState::new("Keys", Session::new(bank))
}

#[test]
fn test_full_keyboard_round() {
    let mut state = app();
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.phase(), Phase::InProgress);

    press(&mut state, KeyCode::Char('c'));
    assert_eq!(state.session.answers().get(0), Some(2));

    press(&mut state, KeyCode::Right);
    assert_eq!(state.session.current_index(), 1);

    press(&mut state, KeyCode::Char('1'));
    assert_eq!(state.session.answers().get(1), Some(0));

    ctrl(&mut state, 's');
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmSubmit));
    press(&mut state, KeyCode::Enter);
    assert!(!state.has_dialog());
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.session.results().unwrap().score, 1);

    press(&mut state, KeyCode::Char('r'));
    assert_eq!(state.phase(), Phase::InProgress);
    assert_eq!(state.session.answers().answered_count(), 0);
}

#[test]
fn test_cancelled_submit_keeps_quiz_running() {
    let mut state = app();
    press(&mut state, KeyCode::Enter);
    ctrl(&mut state, 's');
    press(&mut state, KeyCode::Esc);
    assert!(!state.has_dialog());
    assert_eq!(state.phase(), Phase::InProgress);
}

#[test]
fn test_home_from_results() {
    let mut state = app();
    press(&mut state, KeyCode::Enter);
    ctrl(&mut state, 's');
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('h'));
    assert_eq!(state.phase(), Phase::Welcome);
}

#[test]
fn test_escape_asks_before_quitting() {
    let mut state = app();
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmQuit));
    assert!(!state.should_quit);
    press(&mut state, KeyCode::Enter);
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_q_quits_immediately() {
    let mut state = app();
    ctrl(&mut state, 'q');
    assert!(state.should_quit);
}

fn finished_app() -> AppState {
    let mut state = app();
    press(&mut state, KeyCode::Enter);
    ctrl(&mut state, 's');
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.phase(), Phase::Finished);
    state
}

#[test]
fn test_q_on_quiz_screen_selects_an_option() {
    let bank = QuestionBank::new(vec![Question {
        question: "Pick the seventeenth".to_string(),
        options: (0..17).map(|i| format!("option {}", i)).collect(),
        correct: 16,
    }])
    .unwrap();
    let mut state = AppState::new("Keys", Session::new(bank));
    press(&mut state, KeyCode::Enter);

    press(&mut state, KeyCode::Char('q'));
    assert!(!state.should_quit);
    assert!(!state.has_dialog());
    assert_eq!(state.session.answers().get(0), Some(16));
}

#[test]
fn test_q_on_welcome_asks_before_quitting() {
    let mut state = app();
    press(&mut state, KeyCode::Char('q'));
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmQuit));
    assert!(!state.should_quit);

    press(&mut state, KeyCode::Esc);
    assert!(!state.has_dialog());
    assert!(!state.should_quit);
    assert_eq!(state.phase(), Phase::Welcome);
}

#[test]
fn test_result_screen_quit_keys_ask_first() {
    let mut state = finished_app();
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmQuit));
    press(&mut state, KeyCode::Esc);
    assert!(!state.has_dialog());

    press(&mut state, KeyCode::Char('q'));
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmQuit));
    assert!(!state.should_quit);
    press(&mut state, KeyCode::Enter);
    assert!(state.should_quit);
}

#[test]
fn test_enter_on_result_screen_does_not_quit() {
    let mut state = finished_app();
    press(&mut state, KeyCode::Enter);
    assert!(!state.should_quit);
    assert!(!state.has_dialog());
    assert_eq!(state.phase(), Phase::Finished);
}
