//! Command-line argument definitions for `logline`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::timestamp::TimeInputFormat;

/// Render JSON-structured log events from stdin as console lines.
///
/// Reads one JSON object per line from stdin and writes one colorized,
/// field-order-preserving line to stdout. Lines that do not decode as a JSON
/// object are passed through unchanged.
#[derive(Debug, Parser)]
#[command(name = "logline", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` colorizes when stdout is a TTY, honoring `NO_COLOR`,
    /// `TERM=dumb`, and `FORCE_COLOR`.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// strftime-style format for rendered timestamps.
    #[arg(short = 't', long)]
    pub time_format: Option<String>,

    /// How timestamp values are interpreted (rfc3339, unix, unix-ms, unix-us).
    #[arg(long, value_parser = parse_time_input)]
    pub time_input: Option<TimeInputFormat>,

    /// Well-known parts to render first, in order (comma-separated).
    #[arg(short = 'p', long, value_delimiter = ',')]
    pub parts_order: Option<Vec<String>>,

    /// Parts to never render (comma-separated).
    #[arg(short = 'P', long, value_delimiter = ',')]
    pub exclude_parts: Option<Vec<String>>,

    /// Fields to never render (comma-separated).
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub exclude_fields: Option<Vec<String>>,

    /// JSON key carrying the timestamp part.
    #[arg(long)]
    pub time_key: Option<String>,

    /// JSON key carrying the level part.
    #[arg(long)]
    pub level_key: Option<String>,

    /// JSON key carrying the message part.
    #[arg(long)]
    pub message_key: Option<String>,

    /// JSON key carrying the caller part.
    #[arg(long)]
    pub caller_key: Option<String>,

    /// JSON key treated as the error field.
    #[arg(long)]
    pub error_key: Option<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

impl ColorMode {
    /// Resolve this mode against the process environment and stdout.
    ///
    /// `auto` turns colors off under a non-empty `NO_COLOR` or `TERM=dumb`,
    /// on under a non-empty `FORCE_COLOR` (even when piped), and otherwise
    /// follows whether stdout is a terminal.
    pub fn colors_enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if env_nonempty("NO_COLOR") || std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                    false
                } else if env_nonempty("FORCE_COLOR") {
                    true
                } else {
                    std::io::stdout().is_terminal()
                }
            }
        }
    }
}

fn env_nonempty(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}

/// Parse the `--time-input` argument, case-insensitive.
fn parse_time_input(s: &str) -> Result<TimeInputFormat, String> {
    TimeInputFormat::parse(&s.to_lowercase()).ok_or_else(|| {
        format!("invalid time input format '{s}': expected one of rfc3339, unix, unix-ms, unix-us")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_input_valid() {
        assert_eq!(parse_time_input("rfc3339").unwrap(), TimeInputFormat::Rfc3339);
        assert_eq!(parse_time_input("unix").unwrap(), TimeInputFormat::UnixSeconds);
        assert_eq!(parse_time_input("UNIX-MS").unwrap(), TimeInputFormat::UnixMillis);
        assert_eq!(parse_time_input("unix-us").unwrap(), TimeInputFormat::UnixMicros);
    }

    #[test]
    fn test_parse_time_input_invalid() {
        let err = parse_time_input("nanoseconds").unwrap_err();
        assert!(err.contains("invalid time input format"));
        let err = parse_time_input("").unwrap_err();
        assert!(err.contains("invalid time input format"));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_color_modes_ignore_environment() {
        assert!(ColorMode::Always.colors_enabled());
        assert!(!ColorMode::Never.colors_enabled());
    }
}
