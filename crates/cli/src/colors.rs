// SPDX-License-Identifier: MIT

//! Terminal color utilities for notices and table output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes for notice severities and table chrome.
pub mod codes {
    /// Info notices: pastel cyan/steel blue
    pub const INFO: u8 = 74;
    /// Success notices: soft green
    pub const SUCCESS: u8 = 114;
    /// Warning notices: amber
    pub const WARNING: u8 = 179;
    /// Danger notices: muted red
    pub const DANGER: u8 = 167;
    /// Table headers and ids: medium grey
    pub const CONTEXT: u8 = 245;

    /// ANSI reset sequence.
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stderr is a TTY (notices go there)
    std::io::stderr().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Wrap `text` in the given color when `colorize` is set.
pub fn paint(text: &str, code: u8, colorize: bool) -> String {
    if colorize {
        format!("{}{}{}", fg256(code), text, codes::RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
