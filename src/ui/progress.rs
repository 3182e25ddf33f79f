use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::LineGauge;
use ratatui::Frame;

use crate::state::AppState;

/// Share of questions answered so far, in `0.0..=1.0`.
pub fn answered_ratio(state: &AppState) -> f64 {
    let total = state.session.bank().len();
    if total == 0 {
        return 0.0;
    }
    state.session.answers().answered_count() as f64 / total as f64
}

pub fn draw_progress(f: &mut Frame, area: Rect, state: &AppState) {
    let answered = state.session.answers().answered_count();
    let total = state.session.bank().len();

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label(format!(" answered {}/{} ", answered, total))
        .ratio(answered_ratio(state));
    f.render_widget(gauge, area);
}
