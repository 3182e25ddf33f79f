use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::state::{AppState, QuestionStatus};

pub fn draw_sidebar(f: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let bank = session.bank();
    let current = session.current_index();
    let total = bank.len();

    let inner_height = area.height.saturating_sub(2) as usize;

    // Keep the current question visible.
    let scroll_offset = if current >= inner_height {
        current + 1 - inner_height
    } else {
        0
    };

    let title_max_len = area.width.saturating_sub(11) as usize; // cursor+icon+number+border

    let mut lines: Vec<Line> = Vec::new();
    for (qi, q) in bank.iter().enumerate().skip(scroll_offset).take(inner_height) {
        let status = state.question_status(qi);
        let (icon, color) = match status {
            QuestionStatus::Unanswered => ("○", Color::White),
            QuestionStatus::Correct => ("✓", Color::Green),
            QuestionStatus::Incorrect => ("✗", Color::Red),
        };

        let is_current = qi == current;
        let style = if is_current {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let title: String = q.question.chars().take(title_max_len).collect();
        let title_display = if q.question.chars().count() > title_max_len {
            let mut t: String = title.chars().take(title_max_len.saturating_sub(1)).collect();
            t.push('…');
            t
        } else {
            title
        };

        lines.push(Line::from(vec![
            Span::styled(if is_current { " ▸ " } else { "   " }, style),
            Span::styled(format!("{} ", icon), style.fg(color)),
            Span::styled(format!("{:>2}. ", qi + 1), style),
            Span::styled(title_display, style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
        .title(" Questions ")
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);

    if total > inner_height {
        let mut scrollbar_state = ScrollbarState::new(total).position(current);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}
