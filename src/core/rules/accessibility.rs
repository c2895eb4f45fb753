// src/core/rules/accessibility.rs

use super::{images_missing_alt, AuditContext, Penalty, Rule};
use crate::core::document::{self, ParsedDocument};
use crate::core::knowledge_base::{self as kb, finding};
use scraper::ElementRef;
use tracing::debug;

pub static RULES: &[&dyn Rule] = &[
    &AltTextRule,
    &FormLabelRule,
    &ColorContrastRule,
    &KeyboardNavigationRule,
];

/// Input types that never need a visible label.
const UNLABELED_INPUT_TYPES: &[&str] = &["hidden", "submit", "button"];

const COLOR_PATTERNS: &[&str] = &["color: #", "background-color: #"];

pub struct AltTextRule;

impl Rule for AltTextRule {
    fn name(&self) -> &'static str {
        "a11y-alt-text"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        match images_missing_alt(ctx.document) {
            0 => Vec::new(),
            missing => vec![Penalty::new(
                15,
                finding(
                    kb::A11Y_ALT_TEXT_MISSING,
                    format!("{} images missing alt text for screen readers", missing),
                ),
            )],
        }
    }
}

/// At most one penalty per form: the first input without an associated
/// `<label for=...>` is enough to flag the form.
pub struct FormLabelRule;

impl FormLabelRule {
    fn is_labelled(doc: &ParsedDocument, input: &ElementRef<'_>) -> bool {
        match document::attr(input, "id").filter(|id| !id.is_empty()) {
            Some(id) => doc.find_first("label", "for", id).is_some(),
            None => false,
        }
    }

    fn needs_label(input: &ElementRef<'_>) -> bool {
        document::attr(input, "type").is_none_or(|kind| !UNLABELED_INPUT_TYPES.contains(&kind))
    }
}

impl Rule for FormLabelRule {
    fn name(&self) -> &'static str {
        "form-labels"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        let doc = ctx.document;
        doc.find_all("form")
            .into_iter()
            .enumerate()
            .filter(|(index, form)| {
                let unlabelled = document::find_within(*form, "input")
                    .iter()
                    .any(|input| Self::needs_label(input) && !Self::is_labelled(doc, input));
                if unlabelled {
                    debug!(form = index, "Form has an input without a label.");
                }
                unlabelled
            })
            .map(|_| {
                Penalty::new(
                    5,
                    finding(
                        kb::A11Y_FORM_LABEL_MISSING,
                        "Form input field missing proper label association",
                    ),
                )
            })
            .collect()
    }
}

/// Inline hex colors mean contrast has to be checked by hand.
pub struct ColorContrastRule;

impl Rule for ColorContrastRule {
    fn name(&self) -> &'static str {
        "color-contrast"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        if !COLOR_PATTERNS.iter().any(|pattern| ctx.content.contains(*pattern)) {
            return Vec::new();
        }
        vec![Penalty::new(
            5,
            finding(kb::A11Y_COLOR_CONTRAST, "Page uses custom colors - verify contrast ratios"),
        )]
    }
}

/// A page with neither links nor buttons offers nothing to tab to.
pub struct KeyboardNavigationRule;

impl Rule for KeyboardNavigationRule {
    fn name(&self) -> &'static str {
        "keyboard-navigation"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        if ctx.document.contains("a") || ctx.document.contains("button") {
            return Vec::new();
        }
        vec![Penalty::new(
            10,
            finding(kb::A11Y_KEYBOARD_NAVIGATION, "Page may have keyboard navigation problems"),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::test_support::{names, total, Page};

    #[test]
    fn missing_alt_costs_fifteen_once() {
        let page = Page::html(r#"<img src="a"><img src="b" alt="">"#);
        let penalties = page.run(&AltTextRule);
        assert_eq!(names(&penalties), vec!["Images Missing Alt Text"]);
        assert_eq!(total(&penalties), 15);
        assert_eq!(
            penalties[0].finding.description,
            "2 images missing alt text for screen readers"
        );
    }

    #[test]
    fn labelled_inputs_pass() {
        let page = Page::html(
            r#"<form><label for="email">Email</label><input id="email" type="email">
               <input type="hidden" name="csrf"><input type="submit"><input type="button"></form>"#,
        );
        assert!(page.run(&FormLabelRule).is_empty());
    }

    #[test]
    fn one_finding_per_form_even_with_many_unlabelled_inputs() {
        let page = Page::html(r#"<form><input name="a"><input name="b"><input id="c"></form>"#);
        let penalties = page.run(&FormLabelRule);
        assert_eq!(names(&penalties), vec!["Form Input Missing Label"]);
        assert_eq!(total(&penalties), 5);
    }

    #[test]
    fn each_offending_form_is_penalized() {
        let page = Page::html(
            r#"<form><input name="a"></form><form><label for="ok">Ok</label><input id="ok"></form><form><input id="nolabel"></form>"#,
        );
        assert_eq!(total(&page.run(&FormLabelRule)), 10);
    }

    #[test]
    fn label_may_live_anywhere_in_the_document() {
        let page = Page::html(r#"<label for="q">Search</label><form><input id="q" type="search"></form>"#);
        assert!(page.run(&FormLabelRule).is_empty());
    }

    #[test]
    fn input_without_type_needs_a_label() {
        let page = Page::html(r#"<form><input></form>"#);
        assert_eq!(total(&page.run(&FormLabelRule)), 5);
    }

    #[test]
    fn inputs_outside_forms_are_ignored() {
        let page = Page::html(r#"<input name="loose">"#);
        assert!(page.run(&FormLabelRule).is_empty());
    }

    #[test]
    fn hex_colors_trigger_contrast_check() {
        let penalties = Page::html(r#"<div style="background-color: #fff">x</div>"#).run(&ColorContrastRule);
        assert_eq!(names(&penalties), vec!["Color Contrast Check Needed"]);
        assert_eq!(total(&penalties), 5);

        let both = Page::html(r#"<p style="color: #000; background-color: #FFF">x</p>"#).run(&ColorContrastRule);
        assert_eq!(total(&both), 5);

        assert!(Page::html(r#"<p style="color:#000">x</p>"#).run(&ColorContrastRule).is_empty());
    }

    #[test]
    fn page_without_links_or_buttons_is_flagged() {
        let penalties = Page::html("<p>nothing to focus</p>").run(&KeyboardNavigationRule);
        assert_eq!(names(&penalties), vec!["Keyboard Navigation Issues"]);
        assert_eq!(total(&penalties), 10);

        assert!(Page::html(r#"<a href="/">home</a>"#).run(&KeyboardNavigationRule).is_empty());
        assert!(Page::html("<button>go</button>").run(&KeyboardNavigationRule).is_empty());
    }
}
