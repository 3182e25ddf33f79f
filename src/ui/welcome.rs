use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_welcome(f: &mut Frame, area: Rect, state: &AppState) {
    let total = state.session.bank().len();

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            state.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} questions, one attempt at a time.", total)),
        Line::from("A correct answer moves on by itself after a second."),
        Line::from("After a wrong answer, press → to continue."),
        Line::from(""),
    ];

    if let Some(ref notice) = state.notice {
        lines.push(Line::from(Span::styled(
            format!("✗  {}", notice),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[Enter] Start    [q] Exit",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
