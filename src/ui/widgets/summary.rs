// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

fn rating(score: u8) -> (&'static str, Color) {
    match score {
        90..=100 => ("Excellent", Color::Green),
        75..=89 => ("Good", Color::Cyan),
        50..=74 => ("Needs Improvement", Color::Yellow),
        _ => ("Poor", Color::Red),
    }
}

/// Renders the overall score followed by one gauge per category.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    if !matches!(app.state, AppState::Finished) {
        return;
    }

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(1)];
    for _ in &app.summary.category_scores {
        constraints.push(Constraint::Length(1)); // label
        constraints.push(Constraint::Length(1)); // gauge
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0)); // metadata
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    // --- Overall ---
    let (rating_text, rating_color) = rating(app.summary.overall_score);
    let score_text = Text::from(vec![
        Line::from("Overall Score".bold()),
        Line::from(format!("{}/100 ({})", app.summary.overall_score, rating_text))
            .style(Style::default().fg(rating_color)),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), chunks[0]);

    // --- Per category ---
    for (i, (category, score)) in app.summary.category_scores.iter().enumerate() {
        let (_, color) = rating(*score);
        let label = Line::from(vec![
            Span::raw(format!("{} ", category)),
            Span::styled(format!("{}/100", score), Style::default().fg(color)),
        ]);
        frame.render_widget(Paragraph::new(label), chunks[2 + i * 2]);

        let gauge = Gauge::default()
            .percent(u16::from(*score))
            .label("")
            .gauge_style(Style::default().fg(color));
        frame.render_widget(gauge, chunks[3 + i * 2]);
    }

    // --- Fetch metadata ---
    let mut meta_lines = vec![Line::from(vec![
        Span::raw("Findings: "),
        Span::styled(app.summary.total_findings.to_string(), Style::default().fg(Color::Yellow)),
    ])];
    if let Some(result) = &app.audit_result {
        meta_lines.push(Line::from(format!("Scanned: {}", result.scan_time_display())));
        if let Some(status) = result.status {
            meta_lines.push(Line::from(format!("HTTP status: {}", status)));
        }
        if let Some(load_time) = result.load_time {
            meta_lines.push(Line::from(format!("Load time: {:.2}s", load_time)));
        }
        if let Some(final_url) = &result.final_url {
            meta_lines.push(Line::from(format!("Final URL: {}", final_url)));
        }
    }
    let meta_index = chunks.len() - 1;
    frame.render_widget(
        Paragraph::new(meta_lines).block(Block::default().title("DETAILS".bold())),
        chunks[meta_index],
    );
}
