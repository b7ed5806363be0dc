//! Render configuration, plus the CLI/TOML configuration layer.
//!
//! A [`Config`] is constructed once at sink setup and shared read-only across
//! render calls; rendering never mutates it. For the CLI, settings merge from
//! three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/logline/config.toml` or
//!    `$XDG_CONFIG_HOME/logline/config.toml`)
//! 3. Built-in defaults

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::ConfigError;
use crate::event::Value;
use crate::fields::FieldNames;
use crate::timestamp::{self, TimeInputFormat};

/// A pluggable part or field-value formatter: value in, rendered text out.
///
/// The input is `None` when the event does not carry the key. Formatters must
/// be total; returning an empty string makes the part contribute nothing.
pub type ValueFormatter = Arc<dyn Fn(Option<&Value>) -> String + Send + Sync>;

/// A pluggable field-name formatter.
pub type NameFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Render configuration.
///
/// Every override slot falls back to a built-in formatter when unset. Use
/// struct-update syntax to customize individual settings:
///
/// ```
/// use logline::Config;
///
/// let config = Config {
///     no_color: true,
///     fields_exclude: vec!["pid".to_owned()],
///     ..Config::default()
/// };
/// # let _ = config;
/// ```
#[derive(Clone)]
pub struct Config {
    /// Well-known parts rendered first, in order.
    pub parts_order: Vec<String>,
    /// Parts never rendered even when present.
    pub parts_exclude: Vec<String>,
    /// Fields never rendered in the remaining-fields pass.
    pub fields_exclude: Vec<String>,
    /// Disables all colorization.
    pub no_color: bool,
    /// strftime-style output format for the timestamp part.
    pub time_format: String,
    /// How timestamp values in the event are interpreted.
    pub time_input: TimeInputFormat,
    /// The well-known field names the upstream encoder emits.
    pub field_names: FieldNames,
    /// Override for the timestamp part formatter.
    pub format_timestamp: Option<ValueFormatter>,
    /// Override for the level part formatter.
    pub format_level: Option<ValueFormatter>,
    /// Override for the caller part formatter.
    pub format_caller: Option<ValueFormatter>,
    /// Override for the message part formatter.
    pub format_message: Option<ValueFormatter>,
    /// Override for the generic field-name formatter.
    pub format_field_name: Option<NameFormatter>,
    /// Override for the generic field-value formatter (also used for parts
    /// the configuration does not recognize).
    pub format_field_value: Option<ValueFormatter>,
    /// Override for the error-field name formatter.
    pub format_err_field_name: Option<NameFormatter>,
    /// Override for the error-field value formatter.
    pub format_err_field_value: Option<ValueFormatter>,
}

impl Default for Config {
    fn default() -> Self {
        let field_names = FieldNames::default();
        Self {
            parts_order: field_names.default_parts_order(),
            parts_exclude: Vec::new(),
            fields_exclude: Vec::new(),
            no_color: false,
            time_format: timestamp::DEFAULT_TIME_FORMAT.to_owned(),
            time_input: TimeInputFormat::default(),
            field_names,
            format_timestamp: None,
            format_level: None,
            format_caller: None,
            format_message: None,
            format_field_name: None,
            format_field_value: None,
            format_err_field_name: None,
            format_err_field_value: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("parts_order", &self.parts_order)
            .field("parts_exclude", &self.parts_exclude)
            .field("fields_exclude", &self.fields_exclude)
            .field("no_color", &self.no_color)
            .field("time_format", &self.time_format)
            .field("time_input", &self.time_input)
            .field("field_names", &self.field_names)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if
    /// present. Returns the merged color mode alongside, for the caller to
    /// resolve against the output stream.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<(Self, ColorMode), ConfigError> {
        let mut config = Self::default();
        let mut file_color = None;
        let mut explicit_order = false;

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            explicit_order = file_config.parts_order.is_some();
            file_color = config.apply_file_config(file_config)?;
        }

        if let Some(ref key) = cli.time_key {
            config.field_names.time.clone_from(key);
        }
        if let Some(ref key) = cli.level_key {
            config.field_names.level.clone_from(key);
        }
        if let Some(ref key) = cli.message_key {
            config.field_names.message.clone_from(key);
        }
        if let Some(ref key) = cli.caller_key {
            config.field_names.caller.clone_from(key);
        }
        if let Some(ref key) = cli.error_key {
            config.field_names.error.clone_from(key);
        }

        if let Some(ref format) = cli.time_format {
            config.time_format.clone_from(format);
        }
        if let Some(input) = cli.time_input {
            config.time_input = input;
        }
        if let Some(ref parts) = cli.exclude_parts {
            config.parts_exclude.clone_from(parts);
        }
        if let Some(ref fields) = cli.exclude_fields {
            config.fields_exclude.clone_from(fields);
        }
        if let Some(ref order) = cli.parts_order {
            config.parts_order.clone_from(order);
            explicit_order = true;
        }

        // A non-explicit order tracks renamed keys.
        if !explicit_order {
            config.parts_order = config.field_names.default_parts_order();
        }

        let color_mode = cli.color.or(file_color).unwrap_or(ColorMode::Auto);
        Ok((config, color_mode))
    }

    /// Default config file path: `$XDG_CONFIG_HOME/logline/config.toml` or
    /// `~/.config/logline/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("logline").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("logline")
                .join("config.toml")
        } else {
            PathBuf::from(".config/logline/config.toml")
        }
    }

    /// Apply settings from a parsed config file. Returns the file's color
    /// mode so CLI flags can take precedence over it.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<Option<ColorMode>, ConfigError> {
        let color = match file.color.as_deref() {
            Some("always") => Some(ColorMode::Always),
            Some("never") => Some(ColorMode::Never),
            Some("auto") => Some(ColorMode::Auto),
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "unknown color mode {other:?}: expected auto, always, or never"
                )));
            }
            None => None,
        };

        if let Some(format) = file.time_format {
            self.time_format = format;
        }
        if let Some(name) = file.time_input {
            self.time_input = TimeInputFormat::parse(&name).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "unknown time input format {name:?}: expected rfc3339, unix, unix-ms, or unix-us"
                ))
            })?;
        }
        if let Some(order) = file.parts_order {
            self.parts_order = order;
        }
        if let Some(parts) = file.exclude_parts {
            self.parts_exclude = parts;
        }
        if let Some(fields) = file.exclude_fields {
            self.fields_exclude = fields;
        }

        if let Some(keys) = file.keys {
            if let Some(time) = keys.time {
                self.field_names.time = time;
            }
            if let Some(level) = keys.level {
                self.field_names.level = level;
            }
            if let Some(message) = keys.message {
                self.field_names.message = message;
            }
            if let Some(caller) = keys.caller {
                self.field_names.caller = caller;
            }
            if let Some(error) = keys.error {
                self.field_names.error = error;
            }
        }

        Ok(color)
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    time_format: Option<String>,
    time_input: Option<String>,
    parts_order: Option<Vec<String>>,
    exclude_parts: Option<Vec<String>>,
    exclude_fields: Option<Vec<String>>,
    keys: Option<KeysConfig>,
}

#[derive(Debug, Deserialize)]
struct KeysConfig {
    time: Option<String>,
    level: Option<String>,
    message: Option<String>,
    caller: Option<String>,
    error: Option<String>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Invalid(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
