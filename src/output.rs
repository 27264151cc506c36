//! # Output Configuration
//!
//! Decides whether the binary colors its two output streams:
//!
//! - stderr carries the log records written by `env_logger`
//! - stdout carries the final summary line and its marker
//!
//! `--color=always|never` applies to both. In `auto` mode each stream is
//! checked on its own, so piping the summary into a file keeps colored logs on
//! the terminal. `NO_COLOR`, `CLICOLOR=0`, `CLICOLOR_FORCE` and `TERM=dumb`
//! are honored in auto mode.

use std::env;

use console::Term;

/// Values accepted by the `--color` flag
pub const COLOR_CHOICES: [&str; 3] = ["always", "never", "auto"];

/// Color decision for each output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Color log records on stderr
    pub log_color: bool,
    /// Use the emoji marker in the stdout summary
    pub summary_color: bool,
}

impl OutputConfig {
    /// Build the configuration from the `--color` flag value
    pub fn from_flag(color_flag: &str) -> Self {
        match color_flag {
            "always" => Self::uniform(true),
            "never" => Self::uniform(false),
            _ => match env_override() {
                Some(forced) => Self::uniform(forced),
                None => Self {
                    log_color: Term::stderr().features().colors_supported(),
                    summary_color: Term::stdout().features().colors_supported(),
                },
            },
        }
    }

    fn uniform(use_color: bool) -> Self {
        Self {
            log_color: use_color,
            summary_color: use_color,
        }
    }

    /// The emoji for a colored summary, the plain marker otherwise
    pub fn marker<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.summary_color {
            emoji
        } else {
            plain
        }
    }
}

/// Color preference expressed through the environment, if any
fn env_override() -> Option<bool> {
    // Presence alone disables colors, per https://no-color.org/
    if env::var_os("NO_COLOR").is_some() {
        return Some(false);
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return Some(false);
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return Some(true);
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return Some(false);
    }
    None
}
