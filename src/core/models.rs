// src/core/models.rs

use chrono::{DateTime, Local};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

// --- Categorie ---
// Audit Categories

/// The four independent scoring dimensions of an audit.
///
/// The declaration order is the display and report order, so iterating with
/// `Category::iter()` always yields security, performance, SEO, accessibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[strum(to_string = "Security")]
    Security,
    #[strum(to_string = "Performance")]
    Performance,
    #[strum(to_string = "SEO")]
    Seo,
    #[strum(to_string = "Accessibility")]
    Accessibility,
}

// --- Risultato del Fetch ---
// Fetch Result

/// Immutable snapshot of a single HTTP exchange.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL of the response after redirects were followed.
    pub final_url: String,
    pub status: u16,
    /// `HeaderMap` lookups are case-insensitive.
    pub headers: HeaderMap,
    pub body: String,
    /// Wall-clock seconds from sending the request to having the full body.
    pub load_time: f64,
}

impl FetchResult {
    /// Returns the value of a header, or `None` when it is absent.
    ///
    /// Repeated headers are joined with `", "`. Non UTF-8 values are still
    /// reported as present, with a placeholder.
    pub fn header(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .headers
            .get_all(name)
            .iter()
            .map(|value| value.to_str().unwrap_or("[Invalid UTF-8]"))
            .collect();
        if values.is_empty() { None } else { Some(values.join(", ")) }
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }
}

// --- Finding ---

/// A single reported issue with remediation advice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub name: String,
    pub description: String,
    pub fix_steps: Vec<String>,
}

// --- Risultati per Categoria ---
// Per-Category Results

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryResult {
    /// Always within `0..=100`.
    pub score: u8,
    /// In the order the rules fired.
    pub findings: Vec<Finding>,
}

impl CategoryResult {
    /// The result used for every category when the page could not be fetched.
    pub fn zeroed() -> Self {
        Self { score: 0, findings: Vec::new() }
    }
}

// --- Report Principale ---
// Main Report

/// Aggregate output of one audit invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    /// The requested URL after scheme normalization.
    pub url: String,
    pub scan_time: DateTime<Local>,
    pub final_url: Option<String>,
    pub status: Option<u16>,
    pub load_time: Option<f64>,
    pub security: CategoryResult,
    pub performance: CategoryResult,
    pub seo: CategoryResult,
    pub accessibility: CategoryResult,
    pub error: Option<String>,
}

impl AuditResult {
    /// Builds the degraded result for a fetch failure: every score is zero and
    /// no findings are reported.
    pub fn failed(url: String, scan_time: DateTime<Local>, error: String) -> Self {
        Self {
            url,
            scan_time,
            final_url: None,
            status: None,
            load_time: None,
            security: CategoryResult::zeroed(),
            performance: CategoryResult::zeroed(),
            seo: CategoryResult::zeroed(),
            accessibility: CategoryResult::zeroed(),
            error: Some(error),
        }
    }

    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Security => &self.security,
            Category::Performance => &self.performance,
            Category::Seo => &self.seo,
            Category::Accessibility => &self.accessibility,
        }
    }

    /// Mean of the four category scores.
    pub fn overall_score(&self) -> u8 {
        use strum::IntoEnumIterator;
        let total: u32 = Category::iter().map(|c| self.category(c).score as u32).sum();
        (total / 4) as u8
    }

    pub fn scan_time_display(&self) -> String {
        self.scan_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
