//! # Shape Board
//!
//! An interactive text-console drawing board. Shapes (triangle, circle,
//! rectangle, line) are added to a fixed 80x25 character grid, listed,
//! selected, removed, saved and loaded, and rendered as plain or
//! ANSI-colored text.

pub mod board;
pub mod canvas;
pub mod config;
pub mod errors;
pub mod interactive;

pub use board::{Board, LoadOutcome, Selector, ShapeEntry, ShapeId};
pub use config::BoardConfig;
pub use errors::{BoardError, Result};
pub use interactive::{run_script, Interactive, Reply, Session};
