//! Command execution against a board
//!
//! A session owns the board and knows how to present it. It never prints;
//! replies are returned as text so the REPL and the script runner can share it.

use std::fmt::Write as _;

use tracing::debug;

use super::command::{Command, COMMANDS};
use crate::board::{Board, LoadOutcome};
use crate::canvas::{Rasterizer, ShapeKind};
use crate::errors::Result;

/// Outcome of one executed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user
    Text(String),
    /// Nothing to show (blank line)
    Silent,
    /// The user asked to quit
    Exit,
}

/// Board plus presentation settings
pub struct Session {
    board: Board,
    rasterizer: Box<dyn Rasterizer>,
    auto_draw: bool,
}

impl Session {
    pub fn new(board: Board, rasterizer: Box<dyn Rasterizer>, auto_draw: bool) -> Self {
        Self {
            board,
            rasterizer,
            auto_draw,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Parse and run one line of input
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        if line.trim().is_empty() {
            return Ok(Reply::Silent);
        }
        let command = Command::parse(line)?;
        self.run(command)
    }

    /// Run a parsed command
    pub fn run(&mut self, command: Command) -> Result<Reply> {
        debug!(?command, "Running command");
        let redraw = self.auto_draw && command.mutates();

        let mut text = match command {
            Command::Add { shape, fill, color } => {
                let kind = shape.kind();
                let id = self.board.add_shape(shape, fill, color)?;
                format!("Added {kind} with ID {id}.")
            }
            Command::Draw => self.draw(),
            Command::Clear => {
                self.board.clear();
                "Board cleared.".to_string()
            }
            Command::List => self.list(),
            Command::Shapes => shapes_catalog(),
            Command::Undo => {
                let entry = self.board.undo()?;
                format!("Removed {} with ID {}.", entry.shape().kind(), entry.id())
            }
            Command::Select(selector) => {
                let entry = self.board.select(selector)?;
                format!("Selected {} with ID {}.", entry.shape().kind(), entry.id())
            }
            Command::Remove => {
                let entry = self.board.remove_selected()?;
                format!("Removed {} with ID {}.", entry.shape().kind(), entry.id())
            }
            Command::Save(path) => {
                let count = self.board.save(&path)?;
                format!("Saved {count} shape(s) to {}.", path.display())
            }
            Command::Load(path) => match self.board.load(&path)? {
                LoadOutcome::Loaded(count) => {
                    format!("Loaded {count} shape(s) from {}.", path.display())
                }
                LoadOutcome::Created => {
                    format!("File {} not found; created an empty file.", path.display())
                }
            },
            Command::Help => help_text(),
            Command::Exit => return Ok(Reply::Exit),
        };

        if redraw {
            text.push('\n');
            text.push_str(&self.draw());
        }
        Ok(Reply::Text(text))
    }

    /// Render the board to text
    pub fn draw(&mut self) -> String {
        let grid = self.board.render();
        self.rasterizer.rasterize(grid)
    }

    fn list(&self) -> String {
        if self.board.is_empty() {
            return "No shapes on the board.".to_string();
        }
        self.board.list().join("\n")
    }
}

/// The `shapes` command output
pub fn shapes_catalog() -> String {
    let mut out = String::from("Supported shapes:\n");
    for kind in ShapeKind::ALL {
        let _ = writeln!(out, "  {:<36} {}", kind.usage(), kind.description());
    }
    out.push_str("Fill modes: none, frame, fill. Colors: red, green, blue, yellow (others draw '*').");
    out
}

/// The `help` command output
pub fn help_text() -> String {
    let mut out = String::from("Commands:\n");
    for cmd in COMMANDS {
        let _ = writeln!(out, "  {:<40} {}", cmd.usage, cmd.description);
    }
    out.trim_end().to_string()
}
