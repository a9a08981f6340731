//! Command parsing
//!
//! Turns one line of user input into a [`Command`]. Tokens are separated by
//! whitespace; surplus tokens are ignored. Geometry is validated here,
//! before any shape reaches the board.

use std::path::PathBuf;

use crate::board::{Selector, ShapeId};
use crate::canvas::{Color, Coord, FillMode, Geometry, Shape, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::errors::{BoardError, Result};

/// Help entry for one command
#[derive(Debug, Clone, Copy)]
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the interpreter understands
pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "add",
        usage: "add <type> <fill> <color> <params...>",
        description: "Add a shape (see `shapes` for parameters)",
    },
    CommandHelp {
        name: "draw",
        usage: "draw",
        description: "Render the board",
    },
    CommandHelp {
        name: "list",
        usage: "list",
        description: "List all shapes",
    },
    CommandHelp {
        name: "shapes",
        usage: "shapes",
        description: "Show supported shapes and their parameters",
    },
    CommandHelp {
        name: "select",
        usage: "select <id> | select <x> <y>",
        description: "Select a shape by id or by a point inside it",
    },
    CommandHelp {
        name: "remove",
        usage: "remove",
        description: "Remove the selected shape",
    },
    CommandHelp {
        name: "undo",
        usage: "undo",
        description: "Remove the most recently added shape",
    },
    CommandHelp {
        name: "clear",
        usage: "clear",
        description: "Remove all shapes",
    },
    CommandHelp {
        name: "save",
        usage: "save <file>",
        description: "Save the board to a file",
    },
    CommandHelp {
        name: "load",
        usage: "load <file>",
        description: "Replace the board with the shapes in a file",
    },
    CommandHelp {
        name: "help",
        usage: "help",
        description: "Show this help",
    },
    CommandHelp {
        name: "exit",
        usage: "exit",
        description: "Quit",
    },
];

/// Fill mode keywords, for completion
pub const FILL_MODES: &[&str] = &["none", "frame", "fill"];

/// Palette color names, for completion
pub const COLORS: &[&str] = &["none", "red", "green", "blue", "yellow"];

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        shape: Shape,
        fill: FillMode,
        color: Color,
    },
    Draw,
    Clear,
    List,
    Shapes,
    Undo,
    Select(Selector),
    Remove,
    Save(PathBuf),
    Load(PathBuf),
    Help,
    Exit,
}

impl Command {
    /// Parse a non-empty line
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((action, args)) = tokens.split_first() else {
            return Err(BoardError::UnknownCommand(String::new()));
        };

        match action.to_ascii_lowercase().as_str() {
            "add" => parse_add(args),
            "draw" => Ok(Self::Draw),
            "clear" => Ok(Self::Clear),
            "list" => Ok(Self::List),
            "shapes" => Ok(Self::Shapes),
            "undo" => Ok(Self::Undo),
            "select" => parse_select(args),
            "remove" => Ok(Self::Remove),
            "save" => file_arg("save", args).map(Self::Save),
            "load" => file_arg("load", args).map(Self::Load),
            "help" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(BoardError::UnknownCommand((*action).to_string())),
        }
    }

    /// Whether running the command can change the board
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Clear | Self::Undo | Self::Remove | Self::Load(_)
        )
    }
}

fn parse_number(token: &str) -> Result<Coord> {
    token
        .parse()
        .map_err(|_| BoardError::InvalidNumber(token.to_string()))
}

fn parse_add(args: &[&str]) -> Result<Command> {
    let Some(kind_token) = args.first() else {
        return Err(BoardError::MissingParameters {
            command: "add".to_string(),
            expected: "<type> <fill> <color> <params...>".to_string(),
            found: 0,
        });
    };
    let kind: ShapeKind = kind_token.parse()?;
    let params = kind.param_names();

    let rest = &args[1..];
    if rest.len() < 2 + params.len() {
        let names: Vec<String> = params.iter().map(|p| format!("<{p}>")).collect();
        return Err(BoardError::MissingParameters {
            command: format!("add {}", kind.keyword()),
            expected: format!("<fill> <color> {}", names.join(" ")),
            found: rest.len(),
        });
    }

    let fill: FillMode = rest[0].parse()?;
    let color: Color = rest[1].parse().unwrap_or_default();

    let mut numbers = [0 as Coord; 4];
    for (slot, token) in numbers.iter_mut().zip(&rest[2..2 + params.len()]) {
        *slot = parse_number(token)?;
    }
    let [x, y, p1, p2] = numbers;

    let shape = Shape::from_params(kind, x, y, p1, p2);
    validate_bounds(&shape)?;
    Ok(Command::Add { shape, fill, color })
}

/// Sizes must be positive and the shape's position must be on the board
///
/// Only anchor points are checked; whatever part of the outline overhangs
/// the board is clipped when drawn.
pub fn validate_bounds(shape: &Shape) -> Result<()> {
    let size_ok = match shape {
        Shape::Triangle(t) => t.height() > 0,
        Shape::Circle(c) => c.radius() > 0,
        Shape::Rectangle(r) => r.width() > 0 && r.height() > 0,
        Shape::Line(_) => true,
    };
    if !size_ok {
        return Err(BoardError::OutOfBounds(format!(
            "{shape}: sizes must be positive"
        )));
    }

    let mut anchors = vec![shape.anchor()];
    if let Shape::Line(line) = shape {
        anchors.push(line.end());
    }
    if let Some((x, y)) = anchors.into_iter().find(|&(x, y)| !on_board(x, y)) {
        return Err(BoardError::OutOfBounds(format!(
            "{shape}: ({x},{y}) is outside the {BOARD_WIDTH}x{BOARD_HEIGHT} board"
        )));
    }
    Ok(())
}

fn on_board(x: Coord, y: Coord) -> bool {
    usize::try_from(x).is_ok_and(|x| x < BOARD_WIDTH)
        && usize::try_from(y).is_ok_and(|y| y < BOARD_HEIGHT)
}

fn parse_select(args: &[&str]) -> Result<Command> {
    match args {
        [] => Err(BoardError::MissingParameters {
            command: "select".to_string(),
            expected: "<id> or <x> <y>".to_string(),
            found: 0,
        }),
        [id] => {
            let id: u32 = id
                .parse()
                .map_err(|_| BoardError::InvalidNumber((*id).to_string()))?;
            Ok(Command::Select(Selector::Id(ShapeId::from(id))))
        }
        [x, y, ..] => Ok(Command::Select(Selector::Point {
            x: parse_number(x)?,
            y: parse_number(y)?,
        })),
    }
}

fn file_arg(command: &str, args: &[&str]) -> Result<PathBuf> {
    args.first()
        .map(PathBuf::from)
        .ok_or_else(|| BoardError::MissingParameters {
            command: command.to_string(),
            expected: "<file>".to_string(),
            found: 0,
        })
}
