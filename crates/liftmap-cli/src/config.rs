//! Validated run configuration.

use std::fmt;
use std::path::PathBuf;

use liftmap_export::codec::is_valid_name;
use liftmap_export::ExportNames;
use liftmap_space::{SpaceError, TorusGrid, TraversalPolicy};

use crate::cli::Cli;

/// Everything one run needs, taken from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Elevator list to load.
    pub elevators: PathBuf,
    /// Configuration file to append to.
    pub config: PathBuf,
    /// Grid width.
    pub x_size: u32,
    /// Grid height.
    pub y_size: u32,
    /// Tie-break order of the search.
    pub policy: TraversalPolicy,
    /// Names of the appended statements.
    pub names: ExportNames,
    /// Print the drawing to stdout.
    pub visualize: bool,
}

/// Errors detected by [`RunConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid dimensions are unusable.
    Grid(SpaceError),
    /// A statement name is not an identifier.
    InvalidName {
        /// Which option carried the name.
        option: &'static str,
        /// The rejected name.
        name: String,
    },
    /// Both statements would get the same name.
    DuplicateNames {
        /// The shared name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::InvalidName { option, name } => {
                write!(f, "--{option} {name:?} is not a valid statement name")
            }
            Self::DuplicateNames { name } => {
                write!(f, "coordinate and mapping statements both named {name:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            elevators: cli.elevators.clone(),
            config: cli.config.clone(),
            x_size: cli.x_size,
            y_size: cli.y_size,
            policy: cli.policy.into(),
            names: ExportNames {
                coords: cli.coords_name.clone(),
                mapping: cli.mapping_name.clone(),
            },
            visualize: !cli.no_visualize,
        }
    }
}

impl RunConfig {
    /// Check the configuration and build the grid it describes.
    pub fn validate(&self) -> Result<TorusGrid, ConfigError> {
        let grid = TorusGrid::new(self.x_size, self.y_size).map_err(ConfigError::Grid)?;
        for (option, name) in [
            ("coords-name", &self.names.coords),
            ("mapping-name", &self.names.mapping),
        ] {
            if !is_valid_name(name) {
                return Err(ConfigError::InvalidName {
                    option,
                    name: name.clone(),
                });
            }
        }
        if self.names.coords == self.names.mapping {
            return Err(ConfigError::DuplicateNames {
                name: self.names.coords.clone(),
            });
        }
        Ok(grid)
    }
}
