//! Error types for grid construction and elevator loading.

use liftmap_core::Cell;
use std::fmt;
use std::io;

/// Errors arising from grid construction or elevator validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Name of the dimension (`"x_size"` or `"y_size"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A coordinate lies outside the grid.
    CellOutOfBounds {
        /// Column of the offending coordinate.
        x: i64,
        /// Row of the offending coordinate.
        y: i64,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// The same cell was listed as an elevator more than once.
    DuplicateElevator {
        /// The repeated cell.
        cell: Cell,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::CellOutOfBounds { x, y, bounds } => {
                write!(f, "coordinate ({x}, {y}) out of bounds: {bounds}")
            }
            Self::DuplicateElevator { cell } => write!(f, "duplicate elevator {cell}"),
        }
    }
}

impl std::error::Error for SpaceError {}

/// Errors arising while reading an elevator coordinate source.
///
/// Line numbers are 1-based file lines; the header is line 1.
#[derive(Debug)]
pub enum SourceError {
    /// The source could not be opened or read.
    Io(io::Error),
    /// The first line is not the `X,Y` header.
    MissingHeader {
        /// The first line as found (empty if the source was empty).
        found: String,
    },
    /// A record could not be parsed as an integer pair.
    MalformedRecord {
        /// Line of the record.
        line: usize,
        /// What went wrong.
        detail: String,
    },
    /// A well-formed record names an invalid elevator.
    InvalidElevator {
        /// Line of the record.
        line: usize,
        /// The validation failure.
        source: SpaceError,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingHeader { found } => {
                write!(f, "expected header \"X,Y\" on line 1, found {found:?}")
            }
            Self::MalformedRecord { line, detail } => {
                write!(f, "malformed record on line {line}: {detail}")
            }
            Self::InvalidElevator { line, source } => {
                write!(f, "invalid elevator on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidElevator { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
