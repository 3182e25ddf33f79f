use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let mut bindings: Vec<(&str, &str)> = Vec::new();

    if !session.answers().is_answered(session.current_index()) {
        bindings.push(("a-z", "answer"));
    }
    if session.can_go_previous() {
        bindings.push(("←", "previous"));
    }
    if session.can_go_next() {
        bindings.push(("→", session.next_label()));
    }
    bindings.extend([("Home", "home"), ("Ctrl+S", "submit"), ("Esc", "quit")]);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
