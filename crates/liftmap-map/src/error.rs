//! Error types for mapping and rendering.

use liftmap_core::Cell;
use liftmap_space::SpaceError;
use std::fmt;

/// Errors arising while building, inflating, or rendering a mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The search exhausted every ring without meeting an elevator.
    NoElevatorReachable {
        /// The cell whose search failed.
        cell: Cell,
    },
    /// A table was requested before one was built.
    MappingNotBuilt,
    /// The table and the elevator set describe different grids.
    GridMismatch {
        /// `(x_size, y_size)` of the elevator set.
        expected: (u32, u32),
        /// `(x_size, y_size)` of the table.
        found: (u32, u32),
    },
    /// A flat table does not hold one pair per cell.
    TableSizeMismatch {
        /// Number of values the grid needs.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// A table entry is not a member of the elevator set.
    NotAnElevator {
        /// The cell whose entry is wrong.
        cell: Cell,
        /// The non-elevator it points at.
        target: Cell,
    },
    /// A table entry lies outside the grid.
    Space(SpaceError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoElevatorReachable { cell } => {
                write!(f, "no elevator reachable from {cell}")
            }
            Self::MappingNotBuilt => write!(f, "mapping table has not been built"),
            Self::GridMismatch { expected, found } => write!(
                f,
                "grid mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::TableSizeMismatch { expected, found } => {
                write!(f, "table needs {expected} values, found {found}")
            }
            Self::NotAnElevator { cell, target } => {
                write!(f, "{cell} maps to {target}, which is not an elevator")
            }
            Self::Space(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for MapError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
