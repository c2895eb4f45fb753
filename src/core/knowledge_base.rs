//! Static, read-only database of every finding the rule catalogue can raise,
//! with its display title and the remediation steps shown to the user.
//! Rules only decide *whether* something fires and what was measured; the
//! wording lives here so it can be reviewed and updated in one place.

use crate::core::models::{Category, Finding};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Placeholder replaced by the rule-specific subject (e.g. a header name).
const SUBJECT: &str = "{subject}";

pub const SEC_HTTPS_MISSING: &str = "SEC_HTTPS_MISSING";
pub const SEC_HEADER_MISSING: &str = "SEC_HEADER_MISSING";
pub const SEC_SERVER_DISCLOSURE: &str = "SEC_SERVER_DISCLOSURE";
pub const SEC_SQL_ERROR: &str = "SEC_SQL_ERROR";
pub const SEC_XSS_PATTERN: &str = "SEC_XSS_PATTERN";
pub const PERF_SLOW_LOAD: &str = "PERF_SLOW_LOAD";
pub const PERF_MODERATE_LOAD: &str = "PERF_MODERATE_LOAD";
pub const PERF_LARGE_IMAGES: &str = "PERF_LARGE_IMAGES";
pub const PERF_TOO_MANY_SCRIPTS: &str = "PERF_TOO_MANY_SCRIPTS";
pub const PERF_TOO_MANY_STYLESHEETS: &str = "PERF_TOO_MANY_STYLESHEETS";
pub const SEO_TITLE_MISSING: &str = "SEO_TITLE_MISSING";
pub const SEO_TITLE_TOO_LONG: &str = "SEO_TITLE_TOO_LONG";
pub const SEO_META_DESCRIPTION_MISSING: &str = "SEO_META_DESCRIPTION_MISSING";
pub const SEO_META_DESCRIPTION_TOO_LONG: &str = "SEO_META_DESCRIPTION_TOO_LONG";
pub const SEO_H1_MISSING: &str = "SEO_H1_MISSING";
pub const SEO_H1_MULTIPLE: &str = "SEO_H1_MULTIPLE";
pub const SEO_ALT_TEXT_MISSING: &str = "SEO_ALT_TEXT_MISSING";
pub const A11Y_ALT_TEXT_MISSING: &str = "A11Y_ALT_TEXT_MISSING";
pub const A11Y_FORM_LABEL_MISSING: &str = "A11Y_FORM_LABEL_MISSING";
pub const A11Y_COLOR_CONTRAST: &str = "A11Y_COLOR_CONTRAST";
pub const A11Y_KEYBOARD_NAVIGATION: &str = "A11Y_KEYBOARD_NAVIGATION";

/// Everything needed to present one kind of finding.
pub struct FindingDetail {
    /// Machine-readable identifier, e.g. "SEC_HTTPS_MISSING".
    pub code: &'static str,
    /// Finding name as shown in reports. May contain `{subject}`.
    pub title: &'static str,
    pub category: Category,
    /// Ordered remediation steps. May contain `{subject}`.
    pub fix_steps: &'static [&'static str],
}

static FINDINGS: &[FindingDetail] = &[
    // --- Security ---
    FindingDetail {
        code: SEC_HTTPS_MISSING,
        title: "HTTPS Not Enabled",
        category: Category::Security,
        fix_steps: &[
            "Purchase and install SSL certificate",
            "Configure server to redirect HTTP to HTTPS",
            "Update all internal links to use HTTPS",
            "Test all functionality after HTTPS migration",
        ],
    },
    FindingDetail {
        code: SEC_HEADER_MISSING,
        title: "Missing {subject}",
        category: Category::Security,
        fix_steps: &[
            "Add {subject} header to server configuration",
            "Configure appropriate values for the header",
            "Test the header implementation",
            "Monitor for any functionality issues",
        ],
    },
    FindingDetail {
        code: SEC_SERVER_DISCLOSURE,
        title: "Server Information Disclosure",
        category: Category::Security,
        fix_steps: &[
            "Remove or modify server information headers",
            "Configure server to hide version information",
            "Use generic server names",
            "Regularly audit server configuration",
        ],
    },
    FindingDetail {
        code: SEC_SQL_ERROR,
        title: "SQL Error Information Disclosure",
        category: Category::Security,
        fix_steps: &[
            "Implement proper error handling",
            "Use parameterized queries",
            "Configure custom error pages",
            "Enable error logging instead of user display",
        ],
    },
    FindingDetail {
        code: SEC_XSS_PATTERN,
        title: "Potential XSS Vulnerability",
        category: Category::Security,
        fix_steps: &[
            "Sanitize all user inputs",
            "Use Content Security Policy (CSP)",
            "Implement output encoding",
            "Regular security testing",
        ],
    },
    // --- Performance ---
    FindingDetail {
        code: PERF_SLOW_LOAD,
        title: "Slow Page Load Time",
        category: Category::Performance,
        fix_steps: &[
            "Optimize server response time",
            "Minimize HTTP requests",
            "Enable compression (Gzip)",
            "Use CDN for static assets",
            "Optimize images and media files",
        ],
    },
    FindingDetail {
        code: PERF_MODERATE_LOAD,
        title: "Moderate Page Load Time",
        category: Category::Performance,
        fix_steps: &[
            "Optimize server configuration",
            "Reduce server-side processing",
            "Implement caching strategies",
            "Optimize database queries",
        ],
    },
    FindingDetail {
        code: PERF_LARGE_IMAGES,
        title: "Large Images Detected",
        category: Category::Performance,
        fix_steps: &[
            "Resize images to appropriate dimensions",
            "Use responsive images with srcset",
            "Implement lazy loading",
            "Optimize image formats (WebP, AVIF)",
            "Use image compression tools",
        ],
    },
    FindingDetail {
        code: PERF_TOO_MANY_SCRIPTS,
        title: "Too Many JavaScript Files",
        category: Category::Performance,
        fix_steps: &[
            "Bundle JavaScript files",
            "Minify JavaScript code",
            "Use async/defer attributes",
            "Remove unused JavaScript",
            "Implement code splitting",
        ],
    },
    FindingDetail {
        code: PERF_TOO_MANY_STYLESHEETS,
        title: "Too Many CSS Files",
        category: Category::Performance,
        fix_steps: &[
            "Bundle CSS files",
            "Minify CSS code",
            "Remove unused CSS",
            "Use critical CSS inline",
            "Implement CSS optimization",
        ],
    },
    // --- SEO ---
    FindingDetail {
        code: SEO_TITLE_MISSING,
        title: "Missing Title Tag",
        category: Category::Seo,
        fix_steps: &[
            "Add a unique, descriptive title tag",
            "Keep title between 50-60 characters",
            "Include primary keyword naturally",
            "Make title compelling for users",
        ],
    },
    FindingDetail {
        code: SEO_TITLE_TOO_LONG,
        title: "Title Too Long",
        category: Category::Seo,
        fix_steps: &[
            "Shorten title to 50-60 characters",
            "Focus on primary keyword",
            "Make it compelling and clear",
            "Test in search results preview",
        ],
    },
    FindingDetail {
        code: SEO_META_DESCRIPTION_MISSING,
        title: "Missing Meta Description",
        category: Category::Seo,
        fix_steps: &[
            "Add unique meta description",
            "Keep it between 150-160 characters",
            "Include primary keyword naturally",
            "Make it compelling for click-throughs",
        ],
    },
    FindingDetail {
        code: SEO_META_DESCRIPTION_TOO_LONG,
        title: "Meta Description Too Long",
        category: Category::Seo,
        fix_steps: &[
            "Shorten to 150-160 characters",
            "Focus on compelling description",
            "Include primary keyword",
            "Test in search results",
        ],
    },
    FindingDetail {
        code: SEO_H1_MISSING,
        title: "Missing H1 Tag",
        category: Category::Seo,
        fix_steps: &[
            "Add a single H1 tag per page",
            "Include primary keyword naturally",
            "Make it descriptive and compelling",
            "Ensure it matches page content",
        ],
    },
    FindingDetail {
        code: SEO_H1_MULTIPLE,
        title: "Multiple H1 Tags",
        category: Category::Seo,
        fix_steps: &[
            "Use only one H1 tag per page",
            "Convert extra H1s to H2 or H3",
            "Maintain proper heading hierarchy",
            "Ensure H1 represents main topic",
        ],
    },
    FindingDetail {
        code: SEO_ALT_TEXT_MISSING,
        title: "Images Missing Alt Text",
        category: Category::Seo,
        fix_steps: &[
            "Add descriptive alt text to all images",
            "Include relevant keywords naturally",
            "Describe image content clearly",
            "Use alt=\"\" for decorative images",
        ],
    },
    // --- Accessibility ---
    FindingDetail {
        code: A11Y_ALT_TEXT_MISSING,
        title: "Images Missing Alt Text",
        category: Category::Accessibility,
        fix_steps: &[
            "Add descriptive alt text to all images",
            "Describe image content clearly",
            "Use alt=\"\" for decorative images",
            "Test with screen readers",
        ],
    },
    FindingDetail {
        code: A11Y_FORM_LABEL_MISSING,
        title: "Form Input Missing Label",
        category: Category::Accessibility,
        fix_steps: &[
            "Add unique ID to input field",
            "Create label with matching \"for\" attribute",
            "Use descriptive label text",
            "Test with screen readers",
        ],
    },
    FindingDetail {
        code: A11Y_COLOR_CONTRAST,
        title: "Color Contrast Check Needed",
        category: Category::Accessibility,
        fix_steps: &[
            "Test color contrast ratios (4.5:1 minimum)",
            "Use high contrast color combinations",
            "Test with color blindness simulators",
            "Provide alternative color schemes",
        ],
    },
    FindingDetail {
        code: A11Y_KEYBOARD_NAVIGATION,
        title: "Keyboard Navigation Issues",
        category: Category::Accessibility,
        fix_steps: &[
            "Ensure all interactive elements are keyboard accessible",
            "Add skip navigation links",
            "Test tab order and focus indicators",
            "Implement proper ARIA labels",
        ],
    },
];

static BY_CODE: Lazy<HashMap<&'static str, &'static FindingDetail>> =
    Lazy::new(|| FINDINGS.iter().map(|f| (f.code, f)).collect());

/// Looks up a finding by code.
pub fn get_finding_detail(code: &str) -> Option<&'static FindingDetail> {
    BY_CODE.get(code).copied()
}

/// Builds a `Finding` for `code` with a measured description.
pub fn finding(code: &str, description: impl Into<String>) -> Finding {
    finding_about(code, "", description)
}

/// Like [`finding`], with `{subject}` in the title and steps replaced.
pub fn finding_about(code: &str, subject: &str, description: impl Into<String>) -> Finding {
    let description = description.into();
    match get_finding_detail(code) {
        Some(detail) => {
            debug!(code, category = %detail.category, subject, "Finding raised.");
            Finding {
                name: detail.title.replace(SUBJECT, subject),
                description,
                fix_steps: detail
                    .fix_steps
                    .iter()
                    .map(|step| step.replace(SUBJECT, subject))
                    .collect(),
            }
        }
        None => {
            warn!(code, "Finding code missing from knowledge base.");
            Finding { name: code.to_string(), description, fix_steps: Vec::new() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for detail in FINDINGS {
            assert!(seen.insert(detail.code), "duplicate code {}", detail.code);
        }
    }

    #[test]
    fn every_entry_has_remediation() {
        for detail in FINDINGS {
            assert!(!detail.fix_steps.is_empty(), "{} has no fix steps", detail.code);
        }
    }

    #[test]
    fn subject_is_substituted() {
        let f = finding_about(SEC_HEADER_MISSING, "Referrer-Policy", "Missing Referrer-Policy header");
        assert_eq!(f.name, "Missing Referrer-Policy");
        assert_eq!(f.fix_steps[0], "Add Referrer-Policy header to server configuration");
        assert_eq!(f.fix_steps.len(), 4);
    }

    #[test]
    fn unknown_code_degrades_to_bare_finding() {
        let f = finding("NOT_A_CODE", "text");
        assert_eq!(f.name, "NOT_A_CODE");
        assert!(f.fix_steps.is_empty());
    }

    #[test]
    fn category_tags_match_code_prefixes() {
        for detail in FINDINGS {
            let expected = match detail.code.split('_').next() {
                Some("SEC") => Category::Security,
                Some("PERF") => Category::Performance,
                Some("SEO") => Category::Seo,
                _ => Category::Accessibility,
            };
            assert_eq!(detail.category, expected, "{}", detail.code);
        }
    }
}
