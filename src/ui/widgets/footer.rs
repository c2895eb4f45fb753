// src/ui/widgets/footer.rs

use crate::app::{App, AppState, ExportStatus};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer: available actions, or the outcome of the last export.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match (&app.state, &app.export_status) {
        (AppState::Finished, ExportStatus::Success(path)) => {
            Line::from(format!("Report saved to {}", path)).fg(Color::Green)
        }
        (AppState::Finished, ExportStatus::Error(e)) => {
            Line::from(format!("Export failed: {}", e)).fg(Color::Red)
        }
        (AppState::Idle, _) => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to audit, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        (AppState::Finished, ExportStatus::Idle) => Line::from(vec![
            key("[N]"),
            Span::raw("ew Audit, "),
            key("[E]"),
            Span::raw("xport Text, "),
            key("[J]"),
            Span::raw("SON Export, "),
            key("[L]"),
            Span::raw("ogs, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
        (AppState::Scanning, _) => Line::from("Auditing... Press Q to quit."),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
