// src/core/document.rs

use scraper::{ElementRef, Html};

/// Read-only structural view over a response body.
///
/// Parsing is lenient: any input, however broken, yields a document. Tag and
/// attribute names are matched case-insensitively.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(body: &str) -> Self {
        Self { html: Html::parse_document(body) }
    }

    /// Every element with the given tag name, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<ElementRef<'_>> {
        descendants_named(self.html.root_element(), tag, true)
    }

    /// First element with the given tag whose attribute equals `value` exactly.
    pub fn find_first(&self, tag: &str, attribute: &str, value: &str) -> Option<ElementRef<'_>> {
        self.find_all(tag)
            .into_iter()
            .find(|el| attr(el, attribute) == Some(value))
    }

    /// Elements whose whitespace separated attribute value contains `token`,
    /// the way `rel="preload stylesheet"` matches `stylesheet`.
    pub fn find_all_with_token(&self, tag: &str, attribute: &str, token: &str) -> Vec<ElementRef<'_>> {
        self.find_all(tag)
            .into_iter()
            .filter(|el| {
                attr(el, attribute)
                    .is_some_and(|v| v.split_ascii_whitespace().any(|t| t == token))
            })
            .collect()
    }

    pub fn count(&self, tag: &str) -> usize {
        self.find_all(tag).len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.count(tag) > 0
    }
}

/// Elements with the given tag nested inside `scope`, the scope itself excluded.
pub fn find_within<'a>(scope: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    descendants_named(scope, tag, false)
}

/// Attribute value, or `None` when the attribute is absent.
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(&name.to_ascii_lowercase())
}

/// Concatenated text of the element and all its descendants.
pub fn text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

fn descendants_named<'a>(scope: ElementRef<'a>, tag: &str, include_scope: bool) -> Vec<ElementRef<'a>> {
    let tag = tag.to_ascii_lowercase();
    // `descendants` yields the scope node first.
    let skip = if include_scope { 0 } else { 1 };
    scope
        .descendants()
        .skip(skip)
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == tag)
        .collect()
}
