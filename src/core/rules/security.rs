// src/core/rules/security.rs

use super::{AuditContext, Penalty, Rule};
use crate::core::knowledge_base::{self as kb, finding, finding_about};
use tracing::debug;

pub static RULES: &[&dyn Rule] = &[
    &HttpsRule,
    &SecurityHeadersRule,
    &ServerDisclosureRule,
    &DatabaseErrorRule,
    &ScriptInjectionRule,
];

/// Security headers every response should carry, with what their absence means.
const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("X-Frame-Options", "Missing X-Frame-Options header (clickjacking protection)"),
    ("X-Content-Type-Options", "Missing X-Content-Type-Options header (MIME sniffing protection)"),
    ("X-XSS-Protection", "Missing X-XSS-Protection header (XSS protection)"),
    ("Strict-Transport-Security", "Missing HSTS header (HTTPS enforcement)"),
    ("Content-Security-Policy", "Missing CSP header (content security policy)"),
    ("Referrer-Policy", "Missing Referrer-Policy header (referrer control)"),
];

const SERVER_HEADERS: &[&str] = &["Server", "X-Powered-By", "X-AspNet-Version"];

const DATABASE_ERRORS: &[&str] = &["mysql_error", "oracle error", "sql server error", "postgresql error"];

const INJECTION_PATTERNS: &[&str] = &["<script>", "javascript:", "onerror=", "onload="];

/// Penalizes pages requested over plain HTTP.
pub struct HttpsRule;

impl Rule for HttpsRule {
    fn name(&self) -> &'static str {
        "https"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        if ctx.url.starts_with("https://") {
            return Vec::new();
        }
        vec![Penalty::new(
            25,
            finding(kb::SEC_HTTPS_MISSING, "Website is not using secure HTTPS connection"),
        )]
    }
}

/// One penalty per missing security header; all six are always checked.
pub struct SecurityHeadersRule;

impl Rule for SecurityHeadersRule {
    fn name(&self) -> &'static str {
        "security-headers"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        SECURITY_HEADERS
            .iter()
            .filter(|(header, _)| !ctx.fetch.has_header(header))
            .map(|(header, description)| {
                debug!(header, "Security header missing.");
                Penalty::new(5, finding_about(kb::SEC_HEADER_MISSING, header, *description))
            })
            .collect()
    }
}

/// One penalty per server-identifying header present.
pub struct ServerDisclosureRule;

impl Rule for ServerDisclosureRule {
    fn name(&self) -> &'static str {
        "server-disclosure"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        SERVER_HEADERS
            .iter()
            .filter_map(|header| ctx.fetch.header(header).map(|value| (header, value)))
            .map(|(header, value)| {
                Penalty::new(
                    3,
                    finding(
                        kb::SEC_SERVER_DISCLOSURE,
                        format!("{} header reveals server information: {}", header, value),
                    ),
                )
            })
            .collect()
    }
}

/// Database error strings leaking into the page body.
pub struct DatabaseErrorRule;

impl Rule for DatabaseErrorRule {
    fn name(&self) -> &'static str {
        "database-errors"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        DATABASE_ERRORS
            .iter()
            .filter(|pattern| ctx.content.contains(**pattern))
            .map(|pattern| {
                Penalty::new(
                    15,
                    finding(
                        kb::SEC_SQL_ERROR,
                        format!("Database error information is exposed: {}", pattern),
                    ),
                )
            })
            .collect()
    }
}

/// Markup that hints at inline script or event-handler injection.
pub struct ScriptInjectionRule;

impl Rule for ScriptInjectionRule {
    fn name(&self) -> &'static str {
        "script-injection"
    }

    fn evaluate(&self, ctx: &AuditContext<'_>) -> Vec<Penalty> {
        INJECTION_PATTERNS
            .iter()
            .filter(|pattern| ctx.content.contains(**pattern))
            .map(|pattern| {
                Penalty::new(
                    10,
                    finding(
                        kb::SEC_XSS_PATTERN,
                        format!("Potentially dangerous pattern found: {}", pattern),
                    ),
                )
            })
            .collect()
    }
}
