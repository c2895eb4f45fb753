// src/core/rules/seo.rs

use super::{images_missing_alt, AuditContext, Penalty, Rule};
use crate::core::document;
use crate::core::knowledge_base::{self as kb, finding};

pub static RULES: &[&dyn Rule] = &[
    &TitleRule,
    &MetaDescriptionRule,
    &HeadingRule,
    &SeoAltTextRule,
];

const MAX_TITLE_CHARS: usize = 60;
const MAX_DESCRIPTION_CHARS: usize = 160;

/// Missing/blank title, or else an over-long one.
pub struct TitleRule;

impl Rule for TitleRule {
    fn name(&self) -> &'static str {
        "title"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        let title = ctx.document.find_all("title").first().map(document::text);
        match title {
            Some(text) if !text.trim().is_empty() => {
                // Measured on the raw text, surrounding whitespace included.
                let length = text.chars().count();
                if length > MAX_TITLE_CHARS {
                    vec![Penalty::new(
                        10,
                        finding(
                            kb::SEO_TITLE_TOO_LONG,
                            format!("Title is {} characters (should be 50-60)", length),
                        ),
                    )]
                } else {
                    Vec::new()
                }
            }
            _ => vec![Penalty::new(
                20,
                finding(kb::SEO_TITLE_MISSING, "Page has no title tag or empty title"),
            )],
        }
    }
}

/// Missing/empty meta description, or else an over-long one.
pub struct MetaDescriptionRule;

impl Rule for MetaDescriptionRule {
    fn name(&self) -> &'static str {
        "meta-description"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        let content = ctx
            .document
            .find_first("meta", "name", "description")
            .and_then(|meta| document::attr(&meta, "content"))
            .filter(|content| !content.is_empty());

        let Some(content) = content else {
            return vec![Penalty::new(
                15,
                finding(kb::SEO_META_DESCRIPTION_MISSING, "Page has no meta description"),
            )];
        };

        let length = content.chars().count();
        if length <= MAX_DESCRIPTION_CHARS {
            return Vec::new();
        }
        vec![Penalty::new(
            5,
            finding(
                kb::SEO_META_DESCRIPTION_TOO_LONG,
                format!("Meta description is {} characters", length),
            ),
        )]
    }
}

/// Exactly one H1 is expected.
pub struct HeadingRule;

impl Rule for HeadingRule {
    fn name(&self) -> &'static str {
        "h1"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        match ctx.document.count("h1") {
            0 => vec![Penalty::new(
                15,
                finding(kb::SEO_H1_MISSING, "Page has no H1 heading tag"),
            )],
            1 => Vec::new(),
            n => vec![Penalty::new(
                10,
                finding(
                    kb::SEO_H1_MULTIPLE,
                    format!("Page has {} H1 tags (should have only one)", n),
                ),
            )],
        }
    }
}

pub struct SeoAltTextRule;

impl Rule for SeoAltTextRule {
    fn name(&self) -> &'static str {
        "seo-alt-text"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        match images_missing_alt(ctx.document) {
            0 => Vec::new(),
            missing => vec![Penalty::new(
                10,
                finding(kb::SEO_ALT_TEXT_MISSING, format!("{} images missing alt text", missing)),
            )],
        }
    }
}
