// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    /// Prefix for every environment variable the auditor reads.
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", *PROJECT_NAME);
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Per-user data directory, or `./.data` when the platform has none.
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("com", "vanguard-rs", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

pub fn log_file_path() -> PathBuf {
    data_dir().join(&*LOG_FILE)
}

pub fn reports_dir() -> PathBuf {
    data_dir().join("reports")
}

/// `RUST_LOG` wins over the project-specific variable; both fall back to `info`
/// for this crate only.
fn log_filter<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("RUST_LOG")
        .or_else(|| lookup(LOG_ENV.as_str()))
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Installs the file-based tracing subscriber.
///
/// The terminal belongs to the TUI (or to the printed report in headless mode),
/// so log lines only ever go to the log file.
pub fn initialize_logging() -> Result<()> {
    fs::create_dir_all(data_dir())?;
    let log_file = File::create(log_file_path())?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(log_filter(|key| std::env::var(key).ok())));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_takes_precedence() {
        let filter = log_filter(|key| match key {
            "RUST_LOG" => Some("debug".to_string()),
            _ => Some("warn".to_string()),
        });
        assert_eq!(filter, "debug");
    }

    #[test]
    fn project_variable_is_second_choice() {
        let filter = log_filter(|key| {
            (key == "VANGUARD_RS_AUDIT_LOGLEVEL").then(|| "trace".to_string())
        });
        assert_eq!(filter, "trace");
    }

    #[test]
    fn defaults_to_crate_info() {
        assert_eq!(log_filter(|_| None), "vanguard_rs_audit=info");
    }
}
