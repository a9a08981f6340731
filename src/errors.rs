use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing, rendering or persisting a board
#[derive(Error, Debug)]
pub enum BoardError {
    /// A shape with the same type and geometry is already on the board
    #[error("Shape already exists: {0}")]
    DuplicateShape(String),

    /// The shape would not fit on the grid
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Not enough tokens were given for a command
    #[error("Missing parameters for '{command}': expected {expected}, found {found}")]
    MissingParameters {
        command: String,
        expected: String,
        found: usize,
    },

    /// A token that should have been an integer wasn't
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// No shape matched a select criterion
    #[error("Shape not found: {0}")]
    ShapeNotFound(String),

    /// `remove` was issued with an empty selection slot
    #[error("Nothing selected")]
    NothingSelected,

    /// `undo` was issued on an empty board
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The first token of a line is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// `add` was given a type outside the shape catalogue
    #[error("Unknown shape type: {0}")]
    UnknownShapeType(String),

    /// Fill mode token is not one of none/frame/fill
    #[error("Unknown fill mode: {0} (expected none, frame or fill)")]
    UnknownFillMode(String),

    /// A saved board line could not be parsed
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    /// A board file could not be opened, created or written
    #[error("File access error for {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error loading or saving the configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BoardError {
    /// Wrap an IO error with the path it happened on
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Result with `BoardError`
pub type Result<T> = std::result::Result<T, BoardError>;
