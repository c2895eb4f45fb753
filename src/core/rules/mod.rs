// src/core/rules/mod.rs

//! The rule catalogue. Each rule is an independent, pure evaluator over one
//! fetched page; a category's score is a fold over its rules' penalties.

pub mod accessibility;
pub mod performance;
pub mod security;
pub mod seo;

use crate::core::document::{self, ParsedDocument};
use crate::core::models::{Category, FetchResult, Finding};

/// Everything a rule may look at. Shared read-only by all rules of one audit.
pub struct AuditContext<'a> {
    /// The requested URL after scheme normalization.
    pub url: &'a str,
    pub fetch: &'a FetchResult,
    pub document: &'a ParsedDocument,
    /// The response body, lower-cased once for literal substring checks.
    pub content: String,
}

impl<'a> AuditContext<'a> {
    pub fn new(url: &'a str, fetch: &'a FetchResult, document: &'a ParsedDocument) -> Self {
        Self { url, fetch, document, content: fetch.body.to_lowercase() }
    }
}

/// A finding together with the points it costs its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penalty {
    pub points: u32,
    pub finding: Finding,
}

impl Penalty {
    pub fn new(points: u32, finding: Finding) -> Self {
        Self { points, finding }
    }
}

/// A single check in the catalogue.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Zero or more penalties for this page, in the order they should be reported.
    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty>;
}

/// The rules of one category, in evaluation and display order.
pub fn catalogue(category: Category) -> &'static [&'static dyn Rule] {
    match category {
        Category::Security => security::RULES,
        Category::Performance => performance::RULES,
        Category::Seo => seo::RULES,
        Category::Accessibility => accessibility::RULES,
    }
}

/// Images without a non-empty `alt` attribute. Shared by the SEO and
/// accessibility catalogues, which penalize it independently.
pub(crate) fn images_missing_alt(doc: &ParsedDocument) -> usize {
    doc.find_all("img")
        .iter()
        .filter(|img| document::attr(img, "alt").is_none_or(str::is_empty))
        .count()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

    /// Synthetic page, no network involved.
    pub struct Page {
        pub url: String,
        pub fetch: FetchResult,
        pub document: ParsedDocument,
    }

    impl Page {
        pub fn new(url: &str, headers: &[(&str, &str)], body: &str, load_time: f64) -> Self {
            let mut map = HeaderMap::new();
            for (name, value) in headers {
                map.append(
                    HeaderName::from_bytes(name.as_bytes()).unwrap(),
                    HeaderValue::from_str(value).unwrap(),
                );
            }
            let fetch = FetchResult {
                final_url: url.to_string(),
                status: 200,
                headers: map,
                body: body.to_string(),
                load_time,
            };
            let document = ParsedDocument::parse(body);
            Self { url: url.to_string(), fetch, document }
        }

        /// An HTTPS page with the given body, no headers and a fast load.
        pub fn html(body: &str) -> Self {
            Self::new("https://example.com", &[], body, 0.2)
        }

        pub fn context(&self) -> AuditContext<'_> {
            AuditContext::new(&self.url, &self.fetch, &self.document)
        }

        pub fn run(&self, rule: &dyn Rule) -> Vec<Penalty> {
            rule.evaluate(&self.context())
        }
    }

    pub fn names(penalties: &[Penalty]) -> Vec<&str> {
        penalties.iter().map(|p| p.finding.name.as_str()).collect()
    }

    pub fn total(penalties: &[Penalty]) -> u32 {
        penalties.iter().map(|p| p.points).sum()
    }
}
