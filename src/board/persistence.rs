//! Board persistence
//!
//! One shape per line, whitespace separated:
//!
//! ```text
//! <Type> <x> <y> <param1> <param2> <fill> <color>
//! Rectangle 5 5 10 4 none red
//! Circle 40 12 5 0 fill blue
//! ```
//!
//! Unused parameter slots are written as `0`. Loading trusts the file: the
//! duplicate check is skipped and reading stops at the first record that
//! does not parse.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use super::{Board, ShapeEntry};
use crate::canvas::{Color, Coord, FillMode, Geometry, Shape, ShapeKind};
use crate::errors::{BoardError, Result};

/// Fields per record
const RECORD_FIELDS: usize = 7;

/// Result of [`Board::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed; this many shapes were restored
    Loaded(usize),
    /// The file did not exist and was created empty; the board is untouched
    Created,
}

/// Serialize one entry as a save-file line (without newline)
pub fn format_record(entry: &ShapeEntry) -> String {
    let shape = entry.shape();
    let (x, y) = shape.anchor();
    let (p1, p2) = shape.params();
    format!(
        "{} {x} {y} {p1} {p2} {} {}",
        shape.kind(),
        entry.fill(),
        entry.color()
    )
}

/// Parse one save-file line; `line_no` is only used for error reporting
pub fn parse_record(line_no: usize, line: &str) -> Result<(Shape, FillMode, Color)> {
    let malformed = |message: String| BoardError::MalformedRecord {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < RECORD_FIELDS {
        return Err(malformed(format!(
            "expected {RECORD_FIELDS} fields, found {}",
            fields.len()
        )));
    }

    let kind: ShapeKind = fields[0]
        .parse()
        .map_err(|e: BoardError| malformed(e.to_string()))?;

    let mut numbers = [0 as Coord; 4];
    for (slot, field) in numbers.iter_mut().zip(&fields[1..5]) {
        *slot = field
            .parse()
            .map_err(|_| malformed(format!("invalid number '{field}'")))?;
    }
    let [x, y, p1, p2] = numbers;

    let fill: FillMode = fields[5]
        .parse()
        .map_err(|e: BoardError| malformed(e.to_string()))?;
    let color: Color = fields[6].parse().unwrap_or_default();

    Ok((Shape::from_params(kind, x, y, p1, p2), fill, color))
}

impl Board {
    /// Write every shape to `path` in insertion order, returning the count
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let mut content = String::new();
        for entry in self.entries() {
            content.push_str(&format_record(entry));
            content.push('\n');
        }

        fs::write(path, content).map_err(|e| BoardError::file_access(path, e))?;
        info!(path = %path.display(), count = self.len(), "Saved board");
        Ok(self.len())
    }

    /// Replace the board contents with the shapes stored in `path`
    ///
    /// A missing file is created empty and leaves the board untouched. The
    /// board is only cleared once the whole file has been read.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                File::create(path).map_err(|e| BoardError::file_access(path, e))?;
                info!(path = %path.display(), "Board file not found, created empty file");
                return Ok(LoadOutcome::Created);
            }
            Err(e) => return Err(BoardError::file_access(path, e)),
        };

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(index + 1, line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(path = %path.display(), "Stopped loading: {}", err);
                    break;
                }
            }
        }

        self.clear();
        let loaded = records.len();
        for (shape, fill, color) in records {
            self.insert(shape, fill, color);
        }

        debug!(path = %path.display(), loaded, "Loaded board");
        Ok(LoadOutcome::Loaded(loaded))
    }
}
