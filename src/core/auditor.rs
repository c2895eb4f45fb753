// src/core/auditor.rs

use crate::config::AuditConfig;
use crate::core::document::ParsedDocument;
use crate::core::fetcher::{fetch, normalize_url};
use crate::core::models::{AuditResult, Category, FetchResult};
use crate::core::rules::AuditContext;
use crate::core::scoring::score_category;
use chrono::{DateTime, Local};
use tracing::{error, info};

/// Audits one URL. Never fails: a fetch error becomes `AuditResult::error`
/// with every category scored zero.
///
/// # Arguments
///
/// * `input` - URL as typed by the user; `https://` is added when no scheme is given.
/// * `config` - Fetch settings (timeout, redirect limit, user agent).
pub async fn audit(input: &str, config: &AuditConfig) -> AuditResult {
    let url = normalize_url(input);
    let scan_time = Local::now();
    info!(url = %url, "Starting audit.");

    match fetch(&url, config).await {
        Ok(page) => evaluate(url, &page, scan_time),
        Err(e) => {
            error!(url = %url, error = %e, "Audit aborted, target unreachable.");
            AuditResult::failed(url, scan_time, format!("Failed to access website: {}", e))
        }
    }
}

/// Parses the page once and scores all four categories against it.
///
/// Pure apart from logging: the same inputs always produce the same result.
pub fn evaluate(url: String, page: &FetchResult, scan_time: DateTime<Local>) -> AuditResult {
    let document = ParsedDocument::parse(&page.body);
    let ctx = AuditContext::new(&url, page, &document);

    let security = score_category(Category::Security, &ctx);
    let performance = score_category(Category::Performance, &ctx);
    let seo = score_category(Category::Seo, &ctx);
    let accessibility = score_category(Category::Accessibility, &ctx);

    info!(
        url = %url,
        security = security.score,
        performance = performance.score,
        seo = seo.score,
        accessibility = accessibility.score,
        "Audit finished."
    );

    AuditResult {
        final_url: Some(page.final_url.clone()),
        status: Some(page.status),
        load_time: Some(page.load_time),
        url,
        scan_time,
        security,
        performance,
        seo,
        accessibility,
        error: None,
    }
}
