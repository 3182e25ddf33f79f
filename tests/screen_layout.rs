use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use quizline::model::{Question, QuestionBank};
use quizline::session::{Control, Session};
use quizline::state::AppState;
use quizline::ui::layout::{quiz_layout, result_layout, NARROW_WIDTH};
use quizline::ui::progress::answered_ratio;

fn app() -> AppState {
    let bank = QuestionBank::new(vec![
        Question {
            question: "One".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct: 0,
        },
        Question {
            question: "Two".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct: 1,
        },
    ])
    .unwrap();
    AppState::new("Layout", Session::new(bank))
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_quiz_layout_has_gauge_row_under_title() {
    let layout = quiz_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(layout.titlebar, Rect::new(0, 0, 80, 1));
    assert_eq!(layout.progress, Rect::new(0, 1, 80, 1));
    assert_eq!(layout.statusbar.y, 22);
    assert_eq!(layout.keybar.y, 23);

    assert!(layout.shows_sidebar());
    assert_eq!(layout.sidebar.width, 26);
    assert_eq!(layout.question.x, 26);
    assert_eq!(layout.question.width, 54);
    assert_eq!(layout.question.height, 20);
}

#[test]
fn test_narrow_terminal_hides_sidebar() {
    let layout = quiz_layout(Rect::new(0, 0, NARROW_WIDTH - 1, 20));
    assert!(!layout.shows_sidebar());
    assert_eq!(layout.question.x, 0);
    assert_eq!(layout.question.width, NARROW_WIDTH - 1);
}

#[test]
fn test_result_layout_rows() {
    let layout = result_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(layout.summary.height, 8);
    assert_eq!(layout.details, Rect::new(0, 8, 80, 15));
    assert_eq!(layout.keybar, Rect::new(0, 23, 80, 1));
}

#[test]
fn test_gauge_tracks_answered_questions() {
    let mut state = app();
    state.control(Control::Start);
    assert_eq!(answered_ratio(&state), 0.0);

    state.select(0);
    assert_eq!(answered_ratio(&state), 0.5);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| quizline::ui::draw(f, &state)).unwrap();
    assert!(row_text(&terminal, 1).contains("answered 1/2"));
}
