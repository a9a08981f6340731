//! Character grid the shapes draw into

use super::color::Color;

/// Board width in cells
pub const BOARD_WIDTH: usize = 80;
/// Board height in cells
pub const BOARD_HEIGHT: usize = 25;

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Character to display
    pub ch: char,
    /// Color the character was drawn with
    pub color: Color,
}

impl Cell {
    pub const BLANK: Self = Self {
        ch: ' ',
        color: Color::None,
    };

    /// Cell painted with the glyph of `color`
    pub fn painted(color: &Color) -> Self {
        Self {
            ch: color.glyph(),
            color: color.clone(),
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Fixed-size character buffer
///
/// Coordinates are signed so shapes can compute points off the board;
/// those points are dropped by [`Grid::plot`].
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a blank grid with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Whether `(x, y)` lies on the grid
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Write a cell, silently skipping points outside the grid
    #[inline]
    pub fn plot(&mut self, x: i64, y: i64, cell: &Cell) {
        if self.in_bounds(x, y) {
            let idx = y as usize * self.width + x as usize;
            self.cells[idx] = cell.clone();
        }
    }

    /// Get cell at coordinates
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of non-blank cells
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
