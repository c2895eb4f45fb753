// src/cli.rs

use crate::core::report::ExportFormat;
use clap::Parser;

/// Vanguard RS Audit: single-page website audit (security, performance, SEO,
/// accessibility).
///
/// With a URL the audit runs headless and the report goes to stdout.
/// Without one the interactive terminal UI starts.
#[derive(Parser, Debug)]
#[command(name = "vanguard-rs-audit")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Website to audit; `https://` is assumed when no scheme is given.
    pub url: Option<String>,

    /// Print the audit as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn format(&self) -> ExportFormat {
        if self.json { ExportFormat::Json } else { ExportFormat::Text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn no_arguments_starts_the_tui() {
        let cli = Cli::try_parse_from(["vanguard-rs-audit"]).unwrap();
        assert!(cli.url.is_none());
        assert_eq!(cli.format(), ExportFormat::Text);
    }

    #[test]
    fn url_and_json_flag_in_any_order() {
        let cli = Cli::try_parse_from(["vanguard-rs-audit", "--json", "example.com"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("example.com"));
        assert_eq!(cli.format(), ExportFormat::Json);

        let cli = Cli::try_parse_from(["vanguard-rs-audit", "example.com", "--json"]).unwrap();
        assert_eq!(cli.format(), ExportFormat::Json);
    }

    #[test]
    fn misspelled_flag_is_rejected() {
        let err = Cli::try_parse_from(["vanguard-rs-audit", "--jsn", "example.com"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_and_version_are_provided() {
        let help = Cli::try_parse_from(["vanguard-rs-audit", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        let version = Cli::try_parse_from(["vanguard-rs-audit", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn only_one_url_is_accepted() {
        assert!(Cli::try_parse_from(["vanguard-rs-audit", "a.com", "b.com"]).is_err());
    }
}
