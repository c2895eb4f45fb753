// src/core/rules/performance.rs

use super::{AuditContext, Penalty, Rule};
use crate::core::document::{self, ParsedDocument};
use crate::core::knowledge_base::{self as kb, finding};
use tracing::debug;

pub static RULES: &[&dyn Rule] = &[
    &LoadTimeRule,
    &OversizedImagesRule,
    &ScriptCountRule,
    &StylesheetCountRule,
];

const SLOW_LOAD_SECS: f64 = 3.0;
const MODERATE_LOAD_SECS: f64 = 1.5;
const MAX_IMAGE_WIDTH: i64 = 1920;
const MAX_IMAGE_HEIGHT: i64 = 1080;
const MAX_SCRIPTS: usize = 10;
const MAX_STYLESHEETS: usize = 5;

/// Slow (> 3 s) or moderate (> 1.5 s) load time, never both.
pub struct LoadTimeRule;

impl Rule for LoadTimeRule {
    fn name(&self) -> &'static str {
        "load-time"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        let load_time = ctx.fetch.load_time;
        if load_time > SLOW_LOAD_SECS {
            vec![Penalty::new(
                20,
                finding(
                    kb::PERF_SLOW_LOAD,
                    format!("Page takes {:.2} seconds to load (should be under 3 seconds)", load_time),
                ),
            )]
        } else if load_time > MODERATE_LOAD_SECS {
            vec![Penalty::new(
                10,
                finding(
                    kb::PERF_MODERATE_LOAD,
                    format!("Page takes {:.2} seconds to load (could be faster)", load_time),
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

/// A single penalty when any image declares dimensions beyond full HD.
pub struct OversizedImagesRule;

impl OversizedImagesRule {
    /// Only images declaring both `width` and `height` as plain integers count.
    fn count(doc: &ParsedDocument) -> usize {
        doc.find_all("img")
            .iter()
            .filter(|img| {
                let width = document::attr(img, "width").and_then(parse_dimension);
                let height = document::attr(img, "height").and_then(parse_dimension);
                match (width, height) {
                    (Some(w), Some(h)) => w > MAX_IMAGE_WIDTH || h > MAX_IMAGE_HEIGHT,
                    _ => false,
                }
            })
            .count()
    }
}

/// Signed, so `width="-5" height="5000"` still counts on its height.
fn parse_dimension(raw: &str) -> Option<i64> {
    let parsed = raw.trim().parse::<i64>().ok();
    if parsed.is_none() && !raw.trim().is_empty() {
        debug!(value = raw, "Ignoring non-numeric image dimension.");
    }
    parsed
}

impl Rule for OversizedImagesRule {
    fn name(&self) -> &'static str {
        "oversized-images"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        let large = Self::count(ctx.document);
        if large == 0 {
            return Vec::new();
        }
        vec![Penalty::new(
            10,
            finding(
                kb::PERF_LARGE_IMAGES,
                format!("Found {} images that may be too large for web use", large),
            ),
        )]
    }
}

pub struct ScriptCountRule;

impl Rule for ScriptCountRule {
    fn name(&self) -> &'static str {
        "script-count"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        let scripts = ctx.document.count("script");
        if scripts <= MAX_SCRIPTS {
            return Vec::new();
        }
        vec![Penalty::new(
            5,
            finding(
                kb::PERF_TOO_MANY_SCRIPTS,
                format!("Found {} script tags (consider bundling)", scripts),
            ),
        )]
    }
}

pub struct StylesheetCountRule;

impl Rule for StylesheetCountRule {
    fn name(&self) -> &'static str {
        "stylesheet-count"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        let stylesheets = ctx.document.find_all_with_token("link", "rel", "stylesheet").len();
        if stylesheets <= MAX_STYLESHEETS {
            return Vec::new();
        }
        vec![Penalty::new(
            5,
            finding(
                kb::PERF_TOO_MANY_STYLESHEETS,
                format!("Found {} stylesheet links (consider bundling)", stylesheets),
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::test_support::{names, total, Page};

    fn timed(load_time: f64) -> Page {
        Page::new("https://example.com", &[], "<html></html>", load_time)
    }

    #[test]
    fn fast_page_passes() {
        assert!(timed(1.5).run(&LoadTimeRule).is_empty());
    }

    #[test]
    fn moderate_load_costs_ten() {
        let penalties = timed(2.0).run(&LoadTimeRule);
        assert_eq!(names(&penalties), vec!["Moderate Page Load Time"]);
        assert_eq!(total(&penalties), 10);
        assert_eq!(
            penalties[0].finding.description,
            "Page takes 2.00 seconds to load (could be faster)"
        );
    }

    #[test]
    fn slow_load_wins_over_moderate() {
        let penalties = timed(4.0).run(&LoadTimeRule);
        assert_eq!(names(&penalties), vec!["Slow Page Load Time"]);
        assert_eq!(total(&penalties), 20);
    }

    #[test]
    fn exactly_three_seconds_is_moderate() {
        assert_eq!(names(&timed(3.0).run(&LoadTimeRule)), vec!["Moderate Page Load Time"]);
    }

    #[test]
    fn full_hd_image_is_not_oversized() {
        let page = Page::html(r#"<img src="a.png" width="1920" height="1080" alt="a">"#);
        assert!(page.run(&OversizedImagesRule).is_empty());
    }

    #[test]
    fn one_pixel_wider_is_oversized() {
        let page = Page::html(r#"<img src="a.png" width="1921" height="1080" alt="a">"#);
        let penalties = page.run(&OversizedImagesRule);
        assert_eq!(names(&penalties), vec!["Large Images Detected"]);
        assert_eq!(total(&penalties), 10);
    }

    #[test]
    fn oversized_penalty_is_charged_once() {
        let page = Page::html(
            r#"<img width="4000" height="3000"><img width="100" height="2000"><img width="3000" height="10">"#,
        );
        let penalties = page.run(&OversizedImagesRule);
        assert_eq!(total(&penalties), 10);
        assert_eq!(
            penalties[0].finding.description,
            "Found 3 images that may be too large for web use"
        );
    }

    #[test]
    fn both_dimensions_must_be_declared() {
        let page = Page::html(r#"<img width="5000"><img height="5000"><img src="huge.png">"#);
        assert!(page.run(&OversizedImagesRule).is_empty());
    }

    #[test]
    fn signed_dimensions_are_compared_as_integers() {
        let page = Page::html(r#"<img width="-5" height="5000"><img width="+2000" height="10">"#);
        let penalties = page.run(&OversizedImagesRule);
        assert_eq!(
            penalties[0].finding.description,
            "Found 2 images that may be too large for web use"
        );

        let small = Page::html(r#"<img width="-5" height="-5">"#);
        assert!(small.run(&OversizedImagesRule).is_empty());
    }

    #[test]
    fn non_numeric_dimensions_are_ignored() {
        let page = Page::html(r#"<img width="100%" height="5000"><img width="2000px" height="2000px">"#);
        assert!(page.run(&OversizedImagesRule).is_empty());
    }

    #[test]
    fn script_threshold_is_strict() {
        let ten = "<script></script>".repeat(10);
        assert!(Page::html(&ten).run(&ScriptCountRule).is_empty());

        let eleven = "<script></script>".repeat(11);
        let penalties = Page::html(&eleven).run(&ScriptCountRule);
        assert_eq!(names(&penalties), vec!["Too Many JavaScript Files"]);
        assert_eq!(total(&penalties), 5);
    }

    #[test]
    fn only_stylesheet_links_are_counted() {
        let mut body = r#"<link rel="stylesheet" href="s.css">"#.repeat(5);
        body.push_str(&r#"<link rel="icon" href="i.png">"#.repeat(3));
        assert!(Page::html(&body).run(&StylesheetCountRule).is_empty());

        body.push_str(r#"<link rel="stylesheet" href="t.css">"#);
        let penalties = Page::html(&body).run(&StylesheetCountRule);
        assert_eq!(names(&penalties), vec!["Too Many CSS Files"]);
        assert_eq!(
            penalties[0].finding.description,
            "Found 6 stylesheet links (consider bundling)"
        );
    }
}
