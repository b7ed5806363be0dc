//! Built-in level part formatting.
//!
//! Canonical lowercase level strings map to fixed three-letter codes with the
//! conventional colors. Any other non-empty string is upper-cased and
//! truncated to three characters; absent, empty, or non-string values render
//! as a bold `???` placeholder.

use crate::color::{self, colorize};
use crate::event::Value;

pub(crate) fn format_level(value: Option<&Value>, no_color: bool) -> String {
    let Some(Value::String(level)) = value else {
        return colorize("???", color::BOLD, no_color);
    };
    match level.as_str() {
        "trace" => colorize("TRC", color::MAGENTA, no_color),
        "debug" => colorize("DBG", color::YELLOW, no_color),
        "info" => colorize("INF", color::GREEN, no_color),
        "warn" => colorize("WRN", color::RED, no_color),
        "error" => colorize(&colorize("ERR", color::RED, no_color), color::BOLD, no_color),
        "fatal" => colorize(&colorize("FTL", color::RED, no_color), color::BOLD, no_color),
        "panic" => colorize(&colorize("PNC", color::RED, no_color), color::BOLD, no_color),
        "" => colorize("???", color::BOLD, no_color),
        other => other.to_uppercase().chars().take(3).collect(),
    }
}
