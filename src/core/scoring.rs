// src/core/scoring.rs

use crate::core::models::{Category, CategoryResult};
use crate::core::rules::{catalogue, AuditContext, Rule};
use tracing::{debug, info};

pub const CEILING: i64 = 100;
pub const FLOOR: i64 = 0;

/// Scores one category from its catalogue.
pub fn score_category(category: Category, ctx: &AuditContext<'_>) -> CategoryResult {
    let result = score_rules(catalogue(category), ctx);
    info!(%category, score = result.score, findings = result.findings.len(), "Category scored.");
    result
}

/// Runs every rule in order, sums all penalties and clamps once at the end.
pub fn score_rules(rules: &[&dyn Rule], ctx: &AuditContext<'_>) -> CategoryResult {
    let mut deducted: i64 = 0;
    let mut findings = Vec::new();

    for rule in rules {
        for penalty in rule.evaluate(ctx) {
            debug!(rule = rule.name(), points = penalty.points, finding = %penalty.finding.name, "Rule fired.");
            deducted += i64::from(penalty.points);
            findings.push(penalty.finding);
        }
    }

    let score = (CEILING - deducted).clamp(FLOOR, CEILING);
    CategoryResult { score: score as u8, findings }
}
