//! Rendering of the configured well-known parts.
//!
//! Each part name resolves to a formatter: the configured override if one is
//! set, the built-in formatter for the matching well-known name, or the
//! generic field-value formatter for names the configuration does not
//! recognize. Formatters are total; a part that renders empty contributes
//! nothing, separator included.

use std::path::Path;

use crate::color::{self, colorize};
use crate::config::Config;
use crate::event::{Event, Value};
use crate::{fields, level, timestamp};

/// Append one configured part to `buf`, preceded by a separating space only
/// when the buffer already holds content.
pub(crate) fn write_part(buf: &mut String, event: &Event, part: &str, config: &Config) {
    if config.parts_exclude.iter().any(|excluded| excluded == part) {
        return;
    }

    let names = &config.field_names;
    let value = event.get(part);

    let rendered = if part == names.time {
        match &config.format_timestamp {
            Some(f) => f(value),
            None => timestamp::format_timestamp(value, config),
        }
    } else if part == names.level {
        match &config.format_level {
            Some(f) => f(value),
            None => level::format_level(value, config.no_color),
        }
    } else if part == names.caller {
        match &config.format_caller {
            Some(f) => f(value),
            None => format_caller(value, config.no_color),
        }
    } else if part == names.message {
        match &config.format_message {
            Some(f) => f(value),
            None => format_message(value),
        }
    } else {
        match &config.format_field_value {
            Some(f) => f(value),
            None => fields::format_field_value(value),
        }
    };

    if !rendered.is_empty() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(&rendered);
    }
}

/// Messages render verbatim; an absent message contributes nothing.
fn format_message(value: Option<&Value>) -> String {
    value.map(|v| v.text().to_owned()).unwrap_or_default()
}

/// Callers render as a bold path with a cyan ` >` marker, rewritten relative
/// to the working directory when the path lives under it.
fn format_caller(value: Option<&Value>, no_color: bool) -> String {
    let Some(caller) = value.and_then(Value::as_str) else {
        return String::new();
    };
    if caller.is_empty() {
        return String::new();
    }
    let path = relative_to_cwd(caller).unwrap_or_else(|| caller.to_owned());
    let mut out = colorize(&path, color::BOLD, no_color);
    out.push_str(&colorize(" >", color::CYAN, no_color));
    out
}

fn relative_to_cwd(caller: &str) -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    let rel = Path::new(caller).strip_prefix(&cwd).ok()?;
    Some(rel.display().to_string())
}
