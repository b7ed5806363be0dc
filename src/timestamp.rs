//! Timestamp interpretation and formatting for the timestamp part.
//!
//! Event timestamps arrive either as strings (RFC 3339 by default) or as
//! numeric epoch values whose unit is declared by [`TimeInputFormat`].
//! Rendering goes through [`jiff`] in the local time zone; values that cannot
//! be interpreted are emitted verbatim rather than failing the line.

use jiff::tz::TimeZone;

use crate::color::{self, colorize};
use crate::config::Config;
use crate::event::Value;

/// Default output format: high-precision local time with offset.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Rendering for a timestamp the event does not carry.
const ABSENT: &str = "<nil>";

/// How timestamp values in the event are interpreted.
///
/// This is an explicit per-configuration setting so concurrent pipelines with
/// different upstream encoders cannot interfere with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeInputFormat {
    /// Strings parse as RFC 3339; numbers are epoch seconds.
    #[default]
    Rfc3339,
    /// Numbers are whole seconds since the Unix epoch.
    UnixSeconds,
    /// Numbers are milliseconds since the Unix epoch.
    UnixMillis,
    /// Numbers are microseconds since the Unix epoch.
    UnixMicros,
}

impl TimeInputFormat {
    /// Parse a CLI or config-file name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rfc3339" => Some(Self::Rfc3339),
            "unix" => Some(Self::UnixSeconds),
            "unix-ms" => Some(Self::UnixMillis),
            "unix-us" => Some(Self::UnixMicros),
            _ => None,
        }
    }

    /// Convert an integer epoch value to a timestamp. Sub-second encodings
    /// keep their remainder as a nanosecond offset.
    pub(crate) fn from_epoch(self, value: i64) -> Option<jiff::Timestamp> {
        match self {
            Self::Rfc3339 | Self::UnixSeconds => jiff::Timestamp::from_second(value).ok(),
            Self::UnixMillis => jiff::Timestamp::from_millisecond(value).ok(),
            Self::UnixMicros => jiff::Timestamp::from_microsecond(value).ok(),
        }
    }

    fn parse_string(self, s: &str) -> Option<jiff::Timestamp> {
        match self {
            Self::Rfc3339 => s.parse().ok(),
            _ => None,
        }
    }
}

/// Built-in timestamp part formatter: dark-gray local time, the raw value
/// verbatim when it cannot be interpreted, `<nil>` when absent.
pub(crate) fn format_timestamp(value: Option<&Value>, config: &Config) -> String {
    let text = match value {
        Some(Value::String(s)) => match config.time_input.parse_string(s) {
            Some(ts) => render_local(ts, &config.time_format),
            None => s.clone(),
        },
        Some(Value::Number(digits)) => {
            match digits
                .parse::<i64>()
                .ok()
                .and_then(|n| config.time_input.from_epoch(n))
            {
                Some(ts) => render_local(ts, &config.time_format),
                None => digits.clone(),
            }
        }
        _ => ABSENT.to_owned(),
    };
    colorize(&text, color::DARK_GRAY, config.no_color)
}

fn render_local(ts: jiff::Timestamp, format: &str) -> String {
    ts.to_zoned(TimeZone::system()).strftime(format).to_string()
}
