use std::time::{Duration, Instant};

use quizline::model::{Question, QuestionBank};
use quizline::session::{Control, Direction, Phase, Session};
use quizline::state::{poll_timeout, AppState, QuestionStatus};

fn bank() -> QuestionBank {
    QuestionBank::new(vec![
        Question {
            question: "First".to_string(),
            options: vec!["x".to_string(), "y".to_string()],
            correct: 0,
        },
        Question {
            question: "Second".to_string(),
            options: vec!["x".to_string(), "y".to_string()],
            correct: 1,
        },
    ])
    .unwrap()
}

fn started() -> AppState {
    let mut state = AppState::new("Test", Session::new(bank()));
    state.control(Control::Start);
    state
}

#[test]
fn test_correct_answer_advances_after_delay() {
    let mut state = started();
    state.select(0);

    let pending = state.pending_advance.expect("advance scheduled");
    assert_eq!(pending.from_index, 0);
    assert!(poll_timeout(&state, Instant::now()) <= Duration::from_millis(100));

    state.on_idle(pending.due - Duration::from_millis(1));
    assert_eq!(state.session.current_index(), 0);

    state.on_idle(pending.due);
    assert_eq!(state.session.current_index(), 1);
    assert!(state.pending_advance.is_none());
}

#[test]
fn test_incorrect_answer_waits_for_user() {
    let mut state = started();
    state.select(1);
    assert!(state.pending_advance.is_none());
    assert_eq!(state.question_status(0), QuestionStatus::Incorrect);

    state.navigate(Direction::Next);
    assert_eq!(state.session.current_index(), 1);
}

#[test]
fn test_next_is_hidden_until_answered() {
    let mut state = started();
    state.navigate(Direction::Next);
    assert_eq!(state.session.current_index(), 0);
}

#[test]
fn test_navigation_cancels_pending_advance() {
    let mut state = started();
    state.select(0);
    state.navigate(Direction::Next);
    assert!(state.pending_advance.is_none());
    assert_eq!(state.session.current_index(), 1);

    // Stale advance must not skip past the second question.
    state.on_idle(Instant::now() + Duration::from_secs(5));
    assert_eq!(state.session.current_index(), 1);
}

#[test]
fn test_last_correct_answer_finishes() {
    let mut state = started();
    state.select(0);
    let due = state.pending_advance.unwrap().due;
    state.on_idle(due);
    state.select(1);
    let due = state.pending_advance.unwrap().due;
    state.on_idle(due);

    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.session.results().unwrap().score, 2);
}

#[test]
fn test_empty_bank_sets_notice() {
    let mut state = AppState::new("Empty", Session::new(QuestionBank::default()));
    state.control(Control::Start);
    assert_eq!(state.phase(), Phase::Welcome);
    assert_eq!(state.notice.as_deref(), Some("the question bank is empty"));
}

#[test]
fn test_status_counts() {
    let mut state = started();
    state.select(1);
    let counts = state.status_counts();
    assert_eq!(counts.incorrect, 1);
    assert_eq!(counts.unanswered, 1);
    assert_eq!(counts.correct, 0);
}
