//! Rasterizers converting the grid to terminal text
//!
//! Both variants draw the same `+---+` frame around the board; they only
//! differ in whether a cell's glyph is wrapped in its ANSI color.

use super::caps::{ColorChoice, TerminalCaps};
use super::grid::{Cell, Grid};

/// Trait for rasterizers that convert the grid to printable text
pub trait Rasterizer: Send + Sync {
    /// Convert the grid to framed text, one line per row, newline terminated
    fn rasterize(&self, grid: &Grid) -> String;

    /// Name of this rasterizer
    fn name(&self) -> &'static str;
}

fn border(width: usize) -> String {
    format!("+{}+\n", "-".repeat(width))
}

fn frame_with(grid: &Grid, mut paint_cell: impl FnMut(&mut String, &Cell)) -> String {
    let mut out = border(grid.width());
    for row in grid.rows() {
        out.push('|');
        for cell in row {
            paint_cell(&mut out, cell);
        }
        out.push_str("|\n");
    }
    out.push_str(&border(grid.width()));
    out
}

/// Glyphs only
#[derive(Debug, Default)]
pub struct PlainRasterizer;

impl PlainRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for PlainRasterizer {
    fn rasterize(&self, grid: &Grid) -> String {
        frame_with(grid, |out, cell| out.push(cell.ch))
    }

    fn name(&self) -> &'static str {
        "Plain"
    }
}

/// Glyphs wrapped in ANSI foreground colors
#[derive(Debug, Default)]
pub struct AnsiRasterizer;

impl AnsiRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for AnsiRasterizer {
    fn rasterize(&self, grid: &Grid) -> String {
        frame_with(grid, |out, cell| match cell.color.ansi() {
            Some(ansi) if !cell.is_blank() => {
                out.push_str(&ansi.paint(cell.ch.to_string()).to_string());
            }
            _ => out.push(cell.ch),
        })
    }

    fn name(&self) -> &'static str {
        "Ansi"
    }
}

/// Select the rasterizer for given terminal capabilities and user preference
pub fn select_rasterizer(caps: &TerminalCaps, choice: ColorChoice) -> Box<dyn Rasterizer> {
    if caps.use_color(choice) {
        Box::new(AnsiRasterizer::new())
    } else {
        Box::new(PlainRasterizer::new())
    }
}
