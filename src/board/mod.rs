//! Board - the ordered shape registry
//!
//! The board is the single source of truth for what is drawn: each entry
//! carries its id, geometry, fill mode and color. The grid is rebuilt from
//! the entries on every render.

mod persistence;

use std::fmt;

use tracing::{debug, info};

use crate::canvas::{
    Cell, Circle, Color, Coord, FillMode, Geometry, Grid, Line, Rectangle, Shape, Triangle,
};
use crate::errors::{BoardError, Result};

pub use persistence::{format_record, parse_record, LoadOutcome};

/// Stable shape identifier, assigned by the board
///
/// Ids start at 1 and are never reused, not even after `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u32);

impl ShapeId {
    pub const FIRST: Self = Self(1);

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for ShapeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A shape placed on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeEntry {
    id: ShapeId,
    shape: Shape,
    fill: FillMode,
    color: Color,
}

impl ShapeEntry {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn fill(&self) -> FillMode {
        self.fill
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Rasterize with this entry's fill mode and color
    pub fn draw(&self, grid: &mut Grid) {
        self.shape.draw(grid, self.fill, &Cell::painted(&self.color));
    }
}

/// One `list` line
impl fmt::Display for ShapeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.shape.anchor();
        write!(
            f,
            "ID:{} Type:{} Position:({x},{y}) {} Fill:{} Color:{}",
            self.id,
            self.shape.kind(),
            self.shape.param_labels(),
            self.fill,
            self.color
        )
    }
}

/// How `select` finds a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Exact id
    Id(ShapeId),
    /// Topmost shape whose outline region contains the point
    Point { x: Coord, y: Coord },
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "ID {id}"),
            Self::Point { x, y } => write!(f, "point ({x},{y})"),
        }
    }
}

/// The drawing board
#[derive(Debug, Clone)]
pub struct Board {
    /// Shapes in insertion order
    entries: Vec<ShapeEntry>,
    next_id: ShapeId,
    selected: Option<ShapeId>,
    grid: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty 80x25 board
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: ShapeId::FIRST,
            selected: None,
            grid: Grid::default(),
        }
    }

    /// Add a shape unless one with the same type and geometry exists
    pub fn add_shape(&mut self, shape: Shape, fill: FillMode, color: Color) -> Result<ShapeId> {
        if let Some(existing) = self.entries.iter().find(|e| e.shape == shape) {
            debug!(existing = %existing.id, "Rejected duplicate {}", shape);
            return Err(BoardError::DuplicateShape(format!(
                "{shape} (ID {})",
                existing.id
            )));
        }
        Ok(self.insert(shape, fill, color))
    }

    pub fn add_triangle(
        &mut self,
        x: Coord,
        y: Coord,
        height: Coord,
        fill: FillMode,
        color: Color,
    ) -> Result<ShapeId> {
        self.add_shape(Shape::Triangle(Triangle::new(x, y, height)), fill, color)
    }

    pub fn add_circle(
        &mut self,
        x: Coord,
        y: Coord,
        radius: Coord,
        fill: FillMode,
        color: Color,
    ) -> Result<ShapeId> {
        self.add_shape(Shape::Circle(Circle::new(x, y, radius)), fill, color)
    }

    pub fn add_rectangle(
        &mut self,
        x: Coord,
        y: Coord,
        width: Coord,
        height: Coord,
        fill: FillMode,
        color: Color,
    ) -> Result<ShapeId> {
        self.add_shape(
            Shape::Rectangle(Rectangle::new(x, y, width, height)),
            fill,
            color,
        )
    }

    pub fn add_line(
        &mut self,
        x1: Coord,
        y1: Coord,
        x2: Coord,
        y2: Coord,
        fill: FillMode,
        color: Color,
    ) -> Result<ShapeId> {
        self.add_shape(Shape::Line(Line::new(x1, y1, x2, y2)), fill, color)
    }

    /// Append without the duplicate check
    fn insert(&mut self, shape: Shape, fill: FillMode, color: Color) -> ShapeId {
        let id = self.next_id;
        self.next_id = id.next();
        debug!(%id, "Added {}", shape);
        self.entries.push(ShapeEntry {
            id,
            shape,
            fill,
            color,
        });
        id
    }

    /// Clear the grid and redraw every shape in insertion order
    pub fn render(&mut self) -> &Grid {
        self.grid.clear();
        for entry in &self.entries {
            entry.draw(&mut self.grid);
        }
        &self.grid
    }

    /// Remove the most recently added shape
    pub fn undo(&mut self) -> Result<ShapeEntry> {
        let entry = self.entries.pop().ok_or(BoardError::NothingToUndo)?;
        if self.selected == Some(entry.id) {
            self.selected = None;
        }
        debug!(id = %entry.id, "Undid {}", entry.shape);
        Ok(entry)
    }

    /// Point the selection slot at the shape matching `selector`
    ///
    /// By point, the most recently added hit wins. On a miss the slot is left empty.
    pub fn select(&mut self, selector: Selector) -> Result<&ShapeEntry> {
        let found = match selector {
            Selector::Id(id) => self.entries.iter().position(|e| e.id == id),
            Selector::Point { x, y } => self
                .entries
                .iter()
                .rposition(|e| e.shape.contains_point(i64::from(x), i64::from(y))),
        };

        match found {
            Some(index) => {
                let entry = &self.entries[index];
                self.selected = Some(entry.id);
                debug!(id = %entry.id, "Selected {}", entry.shape);
                Ok(entry)
            }
            None => {
                self.selected = None;
                Err(BoardError::ShapeNotFound(format!("no shape at {selector}")))
            }
        }
    }

    /// Remove the selected shape and empty the selection slot
    pub fn remove_selected(&mut self) -> Result<ShapeEntry> {
        let id = self.selected.take().ok_or(BoardError::NothingSelected)?;
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BoardError::ShapeNotFound(format!("no shape with ID {id}")))?;
        let entry = self.entries.remove(index);
        debug!(%id, "Removed {}", entry.shape);
        Ok(entry)
    }

    /// Remove every shape and the selection; the id counter keeps counting
    pub fn clear(&mut self) {
        info!(count = self.entries.len(), "Clearing board");
        self.entries.clear();
        self.selected = None;
    }

    /// One line per shape, in insertion order
    pub fn list(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Id the next added shape will receive
    pub fn next_id(&self) -> ShapeId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
