// src/ui/widgets/log_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Splits "DATE TIME rest" so the timestamp can be dimmed.
fn style_log_line(line: &str) -> Line<'_> {
    let mut parts = line.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some(timestamp), Some(rest)) if timestamp.starts_with(|c: char| c.is_ascii_digit()) => Line::from(vec![
            Span::styled(timestamp, Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::raw(rest),
        ]),
        _ => Line::from(line),
    }
}

/// Renders the tail of the log file, with horizontal scrolling for long lines.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Logs (scroll with ← →)")
        .borders(Borders::ALL);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let max_width = app
        .log_content
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    app.log_horizontal_scroll_state = app.log_horizontal_scroll_state.content_length(max_width);

    // Keep the newest lines visible.
    let visible = inner_area.height.saturating_sub(1) as usize;
    let skip = app.log_content.len().saturating_sub(visible);
    let log_lines: Vec<Line> = app.log_content[skip..].iter().map(|l| style_log_line(l)).collect();

    let log_paragraph = Paragraph::new(log_lines).scroll((0, app.log_horizontal_scroll as u16));
    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom).thumb_symbol("■");
    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut app.log_horizontal_scroll_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_split_from_message() {
        let line = style_log_line("2025-01-01T10:00:00.000000+01:00  INFO Starting audit.");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "2025-01-01T10:00:00.000000+01:00");
    }

    #[test]
    fn plain_lines_are_left_alone() {
        let line = style_log_line("Log file unavailable: not found");
        assert_eq!(line.spans.len(), 1);
    }
}
