// src/config.rs

use crate::logging::PROJECT_NAME;
use std::time::Duration;
use tracing::warn;

/// Upper bound for a single fetch, redirects included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Runtime settings for the resource fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: format!("VanguardRS-Audit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AuditConfig {
    /// Reads overrides from `VANGUARD_RS_AUDIT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, starting from the defaults.
    ///
    /// Values that do not parse, or are zero, are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let timeout_key = format!("{}_TIMEOUT_SECS", *PROJECT_NAME);
        if let Some(raw) = lookup(&timeout_key) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(key = %timeout_key, value = %raw, "Ignoring invalid timeout override."),
            }
        }

        let redirects_key = format!("{}_MAX_REDIRECTS", *PROJECT_NAME);
        if let Some(raw) = lookup(&redirects_key) {
            match raw.trim().parse::<usize>() {
                Ok(max) if max > 0 => config.max_redirects = max,
                _ => warn!(key = %redirects_key, value = %raw, "Ignoring invalid redirect limit override."),
            }
        }

        let agent_key = format!("{}_USER_AGENT", *PROJECT_NAME);
        if let Some(agent) = lookup(&agent_key).filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        config
    }
}
