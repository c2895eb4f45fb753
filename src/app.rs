// src/app.rs

use crate::core::models::{AuditResult, Category, Finding};
use crate::core::report::{self, ExportFormat};
use crate::logging;
use ratatui::widgets::{ListState, ScrollbarState};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{error, info};

pub const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// How many trailing lines of the log file the log panel keeps.
const LOG_TAIL_LINES: usize = 200;

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub overall_score: u8,
    pub category_scores: Vec<(Category, u8)>,
    pub total_findings: usize,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub audit_result: Option<AuditResult>,
    pub summary: ScanSummary,
    /// Every finding of the last audit, flattened in report order.
    pub all_findings: Vec<(Category, Finding)>,
    pub analysis_list_state: ListState,
    pub export_status: ExportStatus,
    pub show_disclaimer: bool,
    pub spinner_frame: usize,
    pub show_logs: bool,
    pub log_content: Vec<String>,
    /// Size of the log file when `log_content` was last read.
    log_file_len: Option<u64>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            audit_result: None,
            summary: ScanSummary::default(),
            all_findings: Vec::new(),
            analysis_list_state: ListState::default(),
            export_status: ExportStatus::Idle,
            show_disclaimer: true,
            spinner_frame: 0,
            show_logs: false,
            log_content: Vec::new(),
            log_file_len: None,
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
        }
    }

    pub fn on_tick(&mut self) {
        if matches!(self.state, AppState::Scanning) {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
        if self.show_logs {
            self.refresh_logs();
        }
    }

    pub fn start_scan(&mut self) {
        self.state = AppState::Scanning;
        self.spinner_frame = 0;
        self.export_status = ExportStatus::Idle;
    }

    /// Stores a finished audit and prepares the views over it.
    pub fn finish(&mut self, result: AuditResult) {
        self.all_findings = Category::iter()
            .flat_map(|category| {
                result
                    .category(category)
                    .findings
                    .iter()
                    .cloned()
                    .map(move |finding| (category, finding))
            })
            .collect();
        self.analysis_list_state = ListState::default();
        if !self.all_findings.is_empty() {
            self.analysis_list_state.select(Some(0));
        }
        self.audit_result = Some(result);
        self.state = AppState::Finished;
        self.update_summary();
    }

    pub fn update_summary(&mut self) {
        if let Some(result) = &self.audit_result {
            self.summary = ScanSummary {
                overall_score: result.overall_score(),
                category_scores: Category::iter()
                    .map(|category| (category, result.category(category).score))
                    .collect(),
                total_findings: self.all_findings.len(),
            };
        }
    }

    pub fn selected_finding(&self) -> Option<&(Category, Finding)> {
        self.analysis_list_state
            .selected()
            .and_then(|index| self.all_findings.get(index))
    }

    pub fn scroll_up(&mut self) {
        if self.all_findings.is_empty() {
            return;
        }
        let index = self.analysis_list_state.selected().unwrap_or(0);
        self.analysis_list_state.select(Some(index.saturating_sub(1)));
    }

    pub fn scroll_down(&mut self) {
        if self.all_findings.is_empty() {
            return;
        }
        let last = self.all_findings.len() - 1;
        let index = self.analysis_list_state.selected().map_or(0, |i| (i + 1).min(last));
        self.analysis_list_state.select(Some(index));
    }

    pub fn scroll_logs_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_logs_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.log_file_len = None;
            self.refresh_logs();
        }
    }

    fn refresh_logs(&mut self) {
        self.refresh_logs_from(&logging::log_file_path());
    }

    /// Re-reads the log file only when its size changed since the last read.
    fn refresh_logs_from(&mut self, path: &Path) {
        let len = fs::metadata(path).map(|m| m.len()).ok();
        if len.is_some() && len == self.log_file_len {
            return;
        }
        self.log_file_len = len;
        self.log_content = match fs::read_to_string(path) {
            Ok(contents) => tail(&contents, LOG_TAIL_LINES),
            Err(e) => vec![format!("Log file unavailable: {}", e)],
        };
    }

    /// Exports the current audit into the reports directory.
    pub fn export(&mut self, format: ExportFormat) {
        let Some(result) = &self.audit_result else {
            return;
        };
        self.export_status = match report::export(result, format, &logging::reports_dir()) {
            Ok(path) => {
                info!(path = %path.display(), "Export completed.");
                ExportStatus::Success(path.display().to_string())
            }
            Err(e) => {
                error!(error = %e, "Export failed.");
                ExportStatus::Error(e.to_string())
            }
        };
    }

    pub fn dismiss_disclaimer(&mut self) {
        self.show_disclaimer = false;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.audit_result = None;
        self.summary = ScanSummary::default();
        self.all_findings.clear();
        self.analysis_list_state = ListState::default();
        self.export_status = ExportStatus::Idle;
        self.spinner_frame = 0;
    }
}

fn tail(contents: &str, max_lines: usize) -> Vec<String> {
    let lines: Vec<&str> = contents.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].iter().map(|l| l.to_string()).collect()
}
