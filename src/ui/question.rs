use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::session::OptionState;
use crate::state::AppState;

/// Wrap text to fit within `width` columns, breaking at word boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}

fn option_style(state: OptionState) -> (&'static str, Style) {
    match state {
        OptionState::Unselected => ("( )", Style::default()),
        OptionState::SelectedCorrect => (
            "(✓)",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        OptionState::SelectedIncorrect => (
            "(✗)",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        OptionState::CorrectNotSelected => ("( )", Style::default().fg(Color::Green)),
    }
}

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let Some(data) = session.current() else {
        let p = Paragraph::new("No questions").block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    };

    let (position, total) = session.progress();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("  Question {} of {}", position, total),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let body_width = (area.width as usize).saturating_sub(4);
    for wline in wrap_text(&data.question, body_width) {
        lines.push(Line::from(vec![Span::raw("  "), Span::raw(wline)]));
    }
    lines.push(Line::from(""));

    for (i, option) in data.options.iter().enumerate() {
        let letter = (b'A' + (i % 26) as u8) as char;
        let (marker, style) = option_style(option.state);

        // Prefix: "  (✓) A. "
        let prefix = format!("  {} {}. ", marker, letter);
        let prefix_len = prefix.chars().count();
        let text_width = (area.width as usize).saturating_sub(prefix_len + 2);
        for (li, wline) in wrap_text(&option.text, text_width).into_iter().enumerate() {
            if li == 0 {
                lines.push(Line::from(vec![
                    Span::styled(prefix.clone(), style),
                    Span::styled(wline, style),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(prefix_len)),
                    Span::styled(wline, style),
                ]));
            }
        }
    }

    if let Some(message) = session.feedback_for(data.index) {
        let color = if data.selected_option == Some(data.correct_option) {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(""));
        for wline in wrap_text(&message, body_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wline),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }
    }

    // Navigation affordances
    let mut nav: Vec<Span> = vec![Span::raw("  ")];
    if session.can_go_previous() {
        nav.push(Span::styled("[←] Previous", Style::default().fg(Color::Cyan)));
        nav.push(Span::raw("    "));
    }
    if state
        .pending_advance
        .is_some_and(|p| p.from_index == data.index)
    {
        nav.push(Span::styled(
            "Moving on…",
            Style::default().fg(Color::DarkGray),
        ));
    } else if session.can_go_next() {
        nav.push(Span::styled(
            format!("[→] {}", session.next_label()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(nav));

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
