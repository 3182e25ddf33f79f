use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;
use crate::timer::format_elapsed;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let (position, total) = state.session.progress();
    let progress_text = format!(" {}/{} ", position, total);
    let clock_text = format!(" ⏱ {} ", format_elapsed(state.session.elapsed_seconds()));

    let title_text = format!("[ {} ]", state.title);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title across the full width; progress and clock sit right.
    let available = area.width as usize;
    let right_len = progress_text.chars().count() + clock_text.chars().count();
    let title_len = title_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + right_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        Span::styled(progress_text, Style::default().fg(Color::Cyan)),
        Span::styled(clock_text, Style::default().fg(Color::Rgb(200, 200, 120))),
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
