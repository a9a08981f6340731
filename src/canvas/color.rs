//! Symbolic shape colors
//!
//! A color is stored by the name the user typed so that it survives a
//! save/load cycle untouched. Only the four palette names map to a glyph
//! and an ANSI foreground; everything else renders as a plain `*`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use nu_ansi_term::Color as AnsiColor;

/// Glyph used for shapes without a palette color
pub const DEFAULT_GLYPH: char = '*';

/// Shape color, kept as its symbolic name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    None,
    Red,
    Green,
    Blue,
    Yellow,
    /// Any other name; rendered without color but saved verbatim
    Named(String),
}

impl Color {
    /// Character written into the grid for this color
    pub fn glyph(&self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Yellow => 'y',
            Self::None | Self::Named(_) => DEFAULT_GLYPH,
        }
    }

    /// ANSI foreground (31/32/34/33), if the color has one
    pub fn ansi(&self) -> Option<AnsiColor> {
        match self {
            Self::Red => Some(AnsiColor::Red),
            Self::Green => Some(AnsiColor::Green),
            Self::Blue => Some(AnsiColor::Blue),
            Self::Yellow => Some(AnsiColor::Yellow),
            Self::None | Self::Named(_) => None,
        }
    }

    /// Symbolic name as typed by the user
    pub fn name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Named(name) => name,
        }
    }
}

impl FromStr for Color {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "none" => Self::None,
            "red" => Self::Red,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "yellow" => Self::Yellow,
            other => Self::Named(other.to_string()),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
