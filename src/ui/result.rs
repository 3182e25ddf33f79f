use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::result_layout;
use crate::state::AppState;
use crate::timer::format_elapsed;

pub fn draw_result(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(summary) = state.session.results() else {
        return;
    };

    let layout = result_layout(area);

    let header = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Complete",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {} / {}", summary.score, summary.total)),
        Line::from(format!(
            "Time: {} ({}s)",
            format_elapsed(summary.elapsed_seconds),
            summary.elapsed_seconds
        )),
        Line::from(""),
    ];
    let widget = Paragraph::new(header)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", state.title)))
        .alignment(Alignment::Center);
    f.render_widget(widget, layout.summary);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in summary.entries.iter().enumerate() {
        let (icon, color) = if entry.is_correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(format!("Question {}: ", i + 1), label),
            Span::raw(entry.question.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("Your answer: ", label),
            Span::styled(entry.your_answer_text().to_string(), Style::default().fg(color)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("Correct answer: ", label),
            Span::styled(entry.correct_answer.clone(), Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    let max_scroll = lines.len().saturating_sub(1);
    let scroll = state.result_scroll.min(max_scroll) as u16;
    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(details, layout.details);

    let keys = Paragraph::new(Line::from(Span::styled(
        " [r] Restart   [h] Home   [↑/↓] Scroll   [q/Esc] Exit",
        Style::default().fg(Color::DarkGray),
    )))
    .style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(keys, layout.keybar);
}
