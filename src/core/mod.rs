// src/core/mod.rs

// The audit engine. Everything under here is independent of the terminal UI:
// fetch -> parse -> rule catalogue -> scoring -> AuditResult.

/// Data structures shared by the engine and the front ends:
/// `FetchResult`, `Finding`, `CategoryResult`, `AuditResult`.
pub mod models;

/// The single error type of the engine, `FetchError`.
pub mod error;

/// Retrieves the target page (scheme normalization, timeout, redirects).
pub mod fetcher;

/// Lenient HTML parsing and structural queries over the page.
pub mod document;

/// Titles and remediation steps for every finding the rules can raise.
pub mod knowledge_base;

/// Independent rule evaluators, grouped by category.
pub mod rules;

/// Folds rule penalties into per-category scores.
pub mod scoring;

/// The `audit` entry point.
pub mod auditor;

/// Text and JSON report rendering and export.
pub mod report;
