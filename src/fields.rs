//! Rendering of the remaining fields and the configurable well-known names.
//!
//! Everything the part renderer does not claim is rendered as `name=value`
//! pairs in the order the producer wrote them, except that an error field is
//! promoted to the front of the pass.

use crate::color::{self, colorize};
use crate::config::Config;
use crate::event::{Event, Value};

/// The well-known field names, configurable so they can track whatever the
/// upstream encoder emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub time: String,
    pub level: String,
    pub message: String,
    pub caller: String,
    pub error: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            time: "time".to_owned(),
            level: "level".to_owned(),
            message: "message".to_owned(),
            caller: "caller".to_owned(),
            error: "error".to_owned(),
        }
    }
}

impl FieldNames {
    /// The parts rendered, in order, when no explicit order is configured.
    pub fn default_parts_order(&self) -> Vec<String> {
        vec![
            self.time.clone(),
            self.level.clone(),
            self.caller.clone(),
            self.message.clone(),
        ]
    }

    /// Whether `name` is one of the four part names the field pass skips.
    /// The error name stays a regular field; it is only promoted.
    pub(crate) fn is_part(&self, name: &str) -> bool {
        name == self.time || name == self.level || name == self.message || name == self.caller
    }
}

/// Append the remaining fields as `name=value` pairs: the error field first,
/// all others in original order, one space between pairs, none trailing.
pub(crate) fn write_fields(buf: &mut String, event: &Event, config: &Config) {
    let names = &config.field_names;

    let mut fields: Vec<&str> = event
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !names.is_part(name))
        .filter(|name| !config.fields_exclude.iter().any(|excluded| excluded.as_str() == *name))
        .collect();

    if let Some(pos) = fields.iter().position(|name| *name == names.error)
        && pos > 0
    {
        let error = fields.remove(pos);
        fields.insert(0, error);
    }

    if !buf.is_empty() && !fields.is_empty() {
        buf.push(' ');
    }

    for (i, name) in fields.iter().enumerate() {
        let value = event.get(name);
        if *name == names.error {
            match &config.format_err_field_name {
                Some(f) => buf.push_str(&f(name)),
                None => buf.push_str(&format_field_name(name, config.no_color)),
            }
            match &config.format_err_field_value {
                Some(f) => buf.push_str(&f(value)),
                None => buf.push_str(&format_err_field_value(value, config.no_color)),
            }
        } else {
            match &config.format_field_name {
                Some(f) => buf.push_str(&f(name)),
                None => buf.push_str(&format_field_name(name, config.no_color)),
            }
            match &config.format_field_value {
                Some(f) => buf.push_str(&f(value)),
                None => buf.push_str(&format_field_value(value)),
            }
        }
        if i + 1 < fields.len() {
            buf.push(' ');
        }
    }
}

/// Default field-name formatter: cyan `name=`.
pub(crate) fn format_field_name(name: &str, no_color: bool) -> String {
    colorize(&format!("{name}="), color::CYAN, no_color)
}

/// Default field-value formatter: strings quoted when they contain
/// whitespace, numbers and raw spans verbatim.
pub(crate) fn format_field_value(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => quote_if_needed(s),
        Some(Value::Number(text) | Value::Raw(text)) => text.clone(),
    }
}

/// Default error-field-value formatter: same quoting rule, rendered red.
pub(crate) fn format_err_field_value(value: Option<&Value>, no_color: bool) -> String {
    colorize(&format_field_value(value), color::RED, no_color)
}

fn quote_if_needed(s: &str) -> String {
    if s.chars().any(char::is_whitespace) {
        serde_json::to_string(s).unwrap_or_else(|_| s.to_owned())
    } else {
        s.to_owned()
    }
}
