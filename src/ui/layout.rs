//! Screen geometry for the quiz and result screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the question list is hidden and the question takes the
/// whole middle row.
pub const NARROW_WIDTH: u16 = 60;

const SIDEBAR_MAX: u16 = 28;
const RESULT_SUMMARY_HEIGHT: u16 = 8;

pub struct QuizLayout {
    pub titlebar: Rect,
    pub progress: Rect,
    /// Zero-sized on narrow terminals.
    pub sidebar: Rect,
    pub question: Rect,
    pub statusbar: Rect,
    pub keybar: Rect,
}

impl QuizLayout {
    pub fn shows_sidebar(&self) -> bool {
        self.sidebar.width > 0
    }
}

pub struct ResultLayout {
    pub summary: Rect,
    pub details: Rect,
    pub keybar: Rect,
}

pub fn quiz_layout(area: Rect) -> QuizLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title, position, clock
            Constraint::Length(1), // answered gauge
            Constraint::Min(5),
            Constraint::Length(1), // status
            Constraint::Length(1), // keys
        ])
        .split(area);

    let middle = rows[2];
    let (sidebar, question) = if area.width < NARROW_WIDTH {
        (Rect::new(middle.x, middle.y, 0, middle.height), middle)
    } else {
        let width = SIDEBAR_MAX.min(area.width / 3);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Min(20)])
            .split(middle);
        (cols[0], cols[1])
    };

    QuizLayout {
        titlebar: rows[0],
        progress: rows[1],
        sidebar,
        question,
        statusbar: rows[3],
        keybar: rows[4],
    }
}

pub fn result_layout(area: Rect) -> ResultLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(RESULT_SUMMARY_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    ResultLayout {
        summary: rows[0],
        details: rows[1],
        keybar: rows[2],
    }
}
