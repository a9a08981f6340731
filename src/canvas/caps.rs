//! Terminal capability detection
//!
//! Only one thing matters for the board: whether the output stream can
//! show ANSI colors. Detection honours:
//! - `NO_COLOR` (any value disables color)
//! - `TERM=dumb`
//! - stdout not being a terminal (pipes, files)

use std::env;
use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

/// Color depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorDepth {
    /// 16 ANSI colors
    #[default]
    Color16,
    /// Monochrome
    Mono,
}

/// User preference for colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when the terminal supports it
    #[default]
    Auto,
    Always,
    Never,
}

/// Terminal capabilities
#[derive(Debug, Clone, Default)]
pub struct TerminalCaps {
    /// Color depth
    pub colors: ColorDepth,
}

impl TerminalCaps {
    /// Detect terminal capabilities of stdout
    pub fn detect() -> Self {
        let colors = detect_color_depth(
            env::var_os("NO_COLOR").is_some(),
            &env::var("TERM").unwrap_or_default(),
            std::io::stdout().is_terminal(),
        );
        Self { colors }
    }

    /// Whether colored output should be produced for `choice`
    pub fn use_color(&self, choice: ColorChoice) -> bool {
        match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.colors == ColorDepth::Color16,
        }
    }
}

/// Detect color depth
fn detect_color_depth(no_color: bool, term: &str, is_tty: bool) -> ColorDepth {
    if no_color || term == "dumb" || !is_tty {
        ColorDepth::Mono
    } else {
        ColorDepth::Color16
    }
}
