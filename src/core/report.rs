// src/core/report.rs

use crate::core::models::{AuditResult, Category};
use color_eyre::eyre::{Result, WrapErr};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::info;
use url::Url;

/// Output formats for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Flattens an audit into the plain-text report document.
///
/// Layout: header and metadata, the four scores, then every category that has
/// findings with each finding's name, description and numbered fix steps.
/// Categories appear as security, performance, SEO, accessibility; findings
/// in the order their rules fired.
pub fn render_text(result: &AuditResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, result);
    out
}

fn write_text(out: &mut String, result: &AuditResult) -> std::fmt::Result {
    writeln!(out, "Comprehensive Website Audit Report")?;
    writeln!(out, "==================================")?;
    writeln!(out)?;
    writeln!(out, "URL: {}", result.url)?;
    writeln!(out, "Scan Date: {}", result.scan_time_display())?;
    if let Some(final_url) = result.final_url.as_deref().filter(|u| *u != result.url) {
        writeln!(out, "Final URL: {}", final_url)?;
    }
    if let Some(status) = result.status {
        writeln!(out, "HTTP Status: {}", status)?;
    }
    if let Some(load_time) = result.load_time {
        writeln!(out, "Load Time: {:.2}s", load_time)?;
    }
    if let Some(error) = &result.error {
        writeln!(out, "Error: {}", error)?;
    }
    writeln!(out)?;

    writeln!(out, "Overall Audit Scores")?;
    writeln!(out, "--------------------")?;
    for category in Category::iter() {
        writeln!(out, "{}: {}/100", category, result.category(category).score)?;
    }

    for category in Category::iter() {
        let findings = &result.category(category).findings;
        if findings.is_empty() {
            continue;
        }
        writeln!(out)?;
        let heading = format!("{} Findings", category);
        writeln!(out, "{}", heading)?;
        writeln!(out, "{}", "-".repeat(heading.len()))?;
        for finding in findings {
            writeln!(out)?;
            writeln!(out, "{}", finding.name)?;
            writeln!(out, "{}", finding.description)?;
            writeln!(out, "Steps to Fix:")?;
            for (i, step) in finding.fix_steps.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, step)?;
            }
        }
    }
    Ok(())
}

/// File name for an export, e.g. `audit-example.com-20250101-120000.txt`.
fn export_file_name(result: &AuditResult, format: ExportFormat) -> String {
    let host = Url::parse(&result.url)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_else(|| "site".to_string());
    let host: String = host
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    format!(
        "audit-{}-{}.{}",
        host,
        result.scan_time.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

/// Writes the report into `dir`, creating it if needed, and returns the file path.
pub fn export(result: &AuditResult, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Could not create report directory {}", dir.display()))?;
    let path = dir.join(export_file_name(result, format));

    let contents = match format {
        ExportFormat::Text => render_text(result),
        ExportFormat::Json => serde_json::to_string_pretty(result).wrap_err("Could not serialize audit result")?,
    };
    fs::write(&path, contents).wrap_err_with(|| format!("Could not write {}", path.display()))?;

    info!(path = %path.display(), ?format, "Report exported.");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CategoryResult, Finding};
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn sample() -> AuditResult {
        let scan_time = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let mut result = AuditResult::failed("https://example.com".to_string(), scan_time, String::new());
        result.error = None;
        result.final_url = Some("https://example.com/".to_string());
        result.status = Some(200);
        result.load_time = Some(0.42);
        result.security = CategoryResult {
            score: 95,
            findings: vec![Finding {
                name: "Missing Referrer-Policy".to_string(),
                description: "Missing Referrer-Policy header (referrer control)".to_string(),
                fix_steps: vec!["Add it".to_string(), "Test it".to_string()],
            }],
        };
        result.performance = CategoryResult { score: 100, findings: Vec::new() };
        result.seo = CategoryResult { score: 100, findings: Vec::new() };
        result.accessibility = CategoryResult {
            score: 90,
            findings: vec![Finding {
                name: "Keyboard Navigation Issues".to_string(),
                description: "Page may have keyboard navigation problems".to_string(),
                fix_steps: vec!["Add links".to_string()],
            }],
        };
        result
    }

    #[test]
    fn text_report_lists_scores_then_findings() {
        let text = render_text(&sample());
        let expected_scores = "Security: 95/100\nPerformance: 100/100\nSEO: 100/100\nAccessibility: 90/100\n";
        assert!(text.contains(expected_scores));
        assert!(text.contains("Scan Date: 2025-03-14 09:26:53"));
        assert!(text.contains("Steps to Fix:\n  1. Add it\n  2. Test it\n"));

        let security = text.find("Security Findings").unwrap();
        let accessibility = text.find("Accessibility Findings").unwrap();
        assert!(security < accessibility);
        assert!(!text.contains("Performance Findings"));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn failed_audit_reports_the_error() {
        let result = AuditResult::failed(
            "https://nowhere.invalid".to_string(),
            Local::now(),
            "Failed to access website: connection failed".to_string(),
        );
        let text = render_text(&result);
        assert!(text.contains("Error: Failed to access website: connection failed"));
        assert!(text.contains("Security: 0/100"));
        assert!(!text.contains("Findings"));
    }

    #[test]
    fn file_name_uses_host_and_timestamp() {
        assert_eq!(
            export_file_name(&sample(), ExportFormat::Json),
            "audit-example.com-20250314-092653.json"
        );
    }

    #[test]
    fn export_writes_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");

        let text_path = export(&sample(), ExportFormat::Text, &reports).unwrap();
        assert_eq!(fs::read_to_string(&text_path).unwrap(), render_text(&sample()));

        let json_path = export(&sample(), ExportFormat::Json, &reports).unwrap();
        let parsed: AuditResult = serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(parsed.security, sample().security);
        assert_eq!(parsed.url, "https://example.com");
    }
}
