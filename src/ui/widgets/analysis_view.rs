// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::models::Category;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

fn category_tag(category: Category) -> (&'static str, Color) {
    match category {
        Category::Security => ("[SEC] ", Color::Red),
        Category::Performance => ("[PERF] ", Color::Yellow),
        Category::Seo => ("[SEO] ", Color::Cyan),
        Category::Accessibility => ("[A11Y] ", Color::Magenta),
    }
}

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Audit Report (Navigate with ↑ ↓)");

    if !matches!(app.state, AppState::Finished) {
        let content = match app.state {
            AppState::Idle => Paragraph::new("Audit results will appear here...")
                .alignment(Alignment::Center),
            AppState::Scanning => {
                let spinner_char = SPINNER_CHARS[app.spinner_frame];
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                    Span::raw("Auditing... Please wait."),
                ]))
                .alignment(Alignment::Center)
            }
            AppState::Finished => Paragraph::new(""),
        };
        frame.render_widget(content.block(main_block), area);
        return;
    }

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    // A failed fetch has no findings to browse, only the cause.
    if let Some(error) = app.audit_result.as_ref().and_then(|r| r.error.as_deref()) {
        let text = vec![
            Line::from(""),
            Line::from("✗ AUDIT FAILED".bold().fg(Color::Red)),
            Line::from(""),
            Line::from(error.to_string()),
        ];
        let p = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
        frame.render_widget(p, inner_area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(inner_area);

    let items: Vec<ListItem> = app
        .all_findings
        .iter()
        .map(|(category, finding)| {
            let (prefix, color) = category_tag(*category);
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(finding.name.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let findings_list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(findings_list, chunks[0], &mut app.analysis_list_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    match app.selected_finding() {
        Some((category, finding)) => {
            let mut text = vec![
                Line::from(""),
                Line::from(format!("{} · {}", category, finding.name).bold()),
                Line::from(""),
                Line::from("WHAT WAS FOUND:".yellow().bold()),
                Line::from(finding.description.clone()),
                Line::from(""),
                Line::from("HOW TO FIX:".yellow().bold()),
            ];
            text.extend(
                finding
                    .fix_steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| Line::from(format!("{}. {}", i + 1, step))),
            );
            let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block);
            frame.render_widget(p, chunks[1]);
        }
        None => render_placeholder_details(frame, app, detail_block, chunks[1]),
    }
}

fn render_placeholder_details(frame: &mut Frame, app: &App, block: Block, area: Rect) {
    let placeholder_text = if app.summary.total_findings == 0 {
        Text::from(vec![
            Line::from(""),
            Line::from("✓ NO ISSUES FOUND".bold().fg(Color::Green)),
            Line::from(""),
            Line::from("Every security, performance, SEO and accessibility check passed."),
        ])
    } else {
        Text::from("Select an item above to see details.")
    };

    let p = Paragraph::new(placeholder_text).alignment(Alignment::Center).block(block);
    frame.render_widget(p, area);
}
