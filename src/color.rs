//! ANSI styling for rendered parts and fields.
//!
//! A thin wrapper over [`owo_colors::Style`]: every call site goes through
//! [`colorize`], which is an identity function when colors are disabled.
//! Compound styling (bold red level codes) composes two wraps.

use owo_colors::{OwoColorize, Style};

pub(crate) const DARK_GRAY: Style = Style::new().bright_black();
pub(crate) const RED: Style = Style::new().red();
pub(crate) const GREEN: Style = Style::new().green();
pub(crate) const YELLOW: Style = Style::new().yellow();
pub(crate) const MAGENTA: Style = Style::new().magenta();
pub(crate) const CYAN: Style = Style::new().cyan();
pub(crate) const BOLD: Style = Style::new().bold();

/// Wrap `text` in the ANSI sequence for `style`, or return it unchanged when
/// `no_color` is set.
pub(crate) fn colorize(text: &str, style: Style, no_color: bool) -> String {
    if no_color {
        text.to_owned()
    } else {
        text.style(style).to_string()
    }
}
