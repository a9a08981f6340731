//! # Canvas - shape model and character grid
//!
//! Shapes rasterize into a fixed [`Grid`]; a [`Rasterizer`] turns the grid
//! into printable text.
//!
//! ## Architecture
//!
//! ```text
//!     ┌───────────────────────────────┐
//!     │  Shape (Triangle, Circle,     │
//!     │  Rectangle, Line)             │
//!     └──────────────┬────────────────┘
//!                    │ draw(grid, fill, cell)
//!                    ▼
//!     ┌───────────────────────────────┐
//!     │  Grid 80x25 (glyph + color)   │
//!     └──────────────┬────────────────┘
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!    ┌───────────┐       ┌───────────┐
//!    │   Plain   │       │   Ansi    │
//!    └───────────┘       └───────────┘
//! ```

mod caps;
mod color;
mod grid;
mod rasterizer;
mod shapes;

pub use caps::{ColorChoice, ColorDepth, TerminalCaps};
pub use color::Color;
pub use grid::{Cell, Grid, BOARD_HEIGHT, BOARD_WIDTH};
pub use rasterizer::{select_rasterizer, AnsiRasterizer, PlainRasterizer, Rasterizer};
pub use shapes::{
    Circle, Coord, FillMode, Geometry, Line, LinePoints, Rect, Rectangle, Shape, ShapeKind,
    Triangle,
};
