//! Error types for configuration export and import.

use std::fmt;
use std::io;
use std::path::PathBuf;

use liftmap_map::MapError;
use liftmap_space::SpaceError;

/// Errors that can occur while appending to or reading from a
/// configuration file.
#[derive(Debug)]
pub enum ExportError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The configuration file does not exist. Exports only append.
    ConfigMissing {
        /// The path that was expected to exist.
        path: PathBuf,
    },
    /// A statement name is not an identifier.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// No statement with the requested name was found.
    MissingAssignment {
        /// The name looked up.
        name: String,
    },
    /// A statement value is not an integer.
    MalformedValue {
        /// Statement the value belongs to.
        name: String,
        /// Zero-based position of the value inside the braces.
        index: usize,
        /// The offending text.
        token: String,
    },
    /// A mapping statement does not hold one pair per grid cell.
    CountMismatch {
        /// Number of values the grid needs.
        expected: usize,
        /// Number of values found.
        found: usize,
    },
    /// A coordinate statement holds an unpaired value.
    OddCoordinateCount {
        /// Statement name.
        name: String,
        /// Number of values found.
        found: usize,
    },
    /// The mapping is not available or does not fit.
    Map(MapError),
    /// A stored coordinate is invalid for the grid.
    Space(SpaceError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigMissing { path } => {
                write!(f, "configuration file {} does not exist", path.display())
            }
            Self::InvalidName { name } => {
                write!(f, "invalid statement name {name:?}")
            }
            Self::MissingAssignment { name } => {
                write!(f, "no `{name}` statement in configuration")
            }
            Self::MalformedValue { name, index, token } => {
                write!(f, "value {index} of `{name}` is not an integer: {token:?}")
            }
            Self::CountMismatch { expected, found } => {
                write!(f, "mapping needs {expected} values, found {found}")
            }
            Self::OddCoordinateCount { name, found } => {
                write!(f, "`{name}` holds {found} values, expected x,y pairs")
            }
            Self::Map(e) => write!(f, "{e}"),
            Self::Space(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Map(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MapError> for ExportError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<SpaceError> for ExportError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
