pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod progress;
pub mod question;
pub mod result;
pub mod sidebar;
pub mod statusbar;
pub mod titlebar;
pub mod welcome;

use ratatui::Frame;

use crate::session::Phase;
use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    match state.phase() {
        Phase::Welcome => {
            welcome::draw_welcome(f, area, state);
        }
        Phase::InProgress => {
            draw_working(f, area, state);
        }
        Phase::Finished => {
            result::draw_result(f, area, state);
        }
    }

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}

fn draw_working(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let layout = layout::quiz_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    progress::draw_progress(f, layout.progress, state);
    if layout.shows_sidebar() {
        sidebar::draw_sidebar(f, layout.sidebar, state);
    }
    question::draw_question(f, layout.question, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);
}
