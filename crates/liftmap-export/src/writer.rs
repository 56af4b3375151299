//! Appending assignment statements.
//!
//! [`AssignmentWriter`] encodes statements to any `Write` sink.
//! [`ConfigTarget`] wraps an existing configuration file and appends the
//! elevator coordinates and mapping of an [`ElevatorMapping`] to it.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use liftmap_map::ElevatorMapping;
use tracing::info;

use crate::codec::encode_statement;
use crate::error::ExportError;

/// Default statement name for elevator coordinates.
pub const DEFAULT_COORDS_NAME: &str = "elevatorcoords";

/// Default statement name for the mapping table.
pub const DEFAULT_MAPPING_NAME: &str = "elevatormapping";

/// Writes `name={...}` statements to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production code
/// can use an append-mode `File`. Each statement is passed to the sink with
/// a single `write_all`.
///
/// # Examples
///
/// ```
/// use liftmap_export::AssignmentWriter;
///
/// let mut buf = Vec::new();
/// let mut writer = AssignmentWriter::new(&mut buf);
/// writer.write_statement("a", [1, 2]).unwrap();
/// writer.write_statement("b", []).unwrap();
/// assert_eq!(writer.statements_written(), 2);
/// drop(writer);
/// assert_eq!(buf, b"\na={1,2}\nb={}");
/// ```
pub struct AssignmentWriter<W: Write> {
    writer: W,
    statements_written: u64,
}

impl<W: Write> AssignmentWriter<W> {
    /// Wrap a sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            statements_written: 0,
        }
    }

    /// Encode and write one statement.
    pub fn write_statement(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = u32>,
    ) -> Result<(), ExportError> {
        let text = encode_statement(name, values)?;
        self.writer.write_all(text.as_bytes())?;
        self.statements_written += 1;
        Ok(())
    }

    /// Write the coordinates of every elevator, in input order.
    ///
    /// Fails with [`MapError::MappingNotBuilt`](liftmap_map::MapError::MappingNotBuilt)
    /// until the table exists, so coordinates and mapping are always
    /// exported from the same state.
    pub fn write_elevator_coords(
        &mut self,
        mapping: &ElevatorMapping,
        name: &str,
    ) -> Result<(), ExportError> {
        mapping.mapping()?;
        let values = mapping.elevators().iter().flat_map(|c| [c.x, c.y]);
        self.write_statement(name, values)
    }

    /// Write the mapping table, column-major.
    pub fn write_elevator_mapping(
        &mut self,
        mapping: &ElevatorMapping,
        name: &str,
    ) -> Result<(), ExportError> {
        let table = mapping.mapping()?;
        self.write_statement(name, table.flatten())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of statements written so far.
    pub fn statements_written(&self) -> u64 {
        self.statements_written
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Statement names used when exporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportNames {
    /// Name of the coordinate statement.
    pub coords: String,
    /// Name of the mapping statement.
    pub mapping: String,
}

impl Default for ExportNames {
    fn default() -> Self {
        Self {
            coords: DEFAULT_COORDS_NAME.to_string(),
            mapping: DEFAULT_MAPPING_NAME.to_string(),
        }
    }
}

/// An existing configuration file that statements are appended to.
///
/// The file is opened in append mode for each export and closed again, so
/// every export lands at the end of the file as one write.
#[derive(Clone, Debug)]
pub struct ConfigTarget {
    path: PathBuf,
}

impl ConfigTarget {
    /// Refer to `path`, which must already exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ExportError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the elevator coordinates as `name={x1,y1,x2,y2,...}`.
    pub fn append_elevator_coords(
        &self,
        mapping: &ElevatorMapping,
        name: &str,
    ) -> Result<(), ExportError> {
        let mut writer = self.appender()?;
        writer.write_elevator_coords(mapping, name)?;
        info!(
            path = %self.path.display(),
            name,
            elevators = mapping.elevators().len(),
            "appended elevator coordinates"
        );
        Ok(())
    }

    /// Append the mapping table as `name={...}`, column-major.
    pub fn append_elevator_mapping(
        &self,
        mapping: &ElevatorMapping,
        name: &str,
    ) -> Result<(), ExportError> {
        let mut writer = self.appender()?;
        writer.write_elevator_mapping(mapping, name)?;
        info!(
            path = %self.path.display(),
            name,
            cells = mapping.grid().cell_count(),
            "appended elevator mapping"
        );
        Ok(())
    }

    /// Append the mapping, then the coordinates.
    pub fn append_all(
        &self,
        mapping: &ElevatorMapping,
        names: &ExportNames,
    ) -> Result<(), ExportError> {
        self.append_elevator_mapping(mapping, &names.mapping)?;
        self.append_elevator_coords(mapping, &names.coords)
    }

    fn appender(&self) -> Result<AssignmentWriter<std::fs::File>, ExportError> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ExportError::ConfigMissing {
                    path: self.path.clone(),
                },
                _ => ExportError::Io(e),
            })?;
        Ok(AssignmentWriter::new(file))
    }
}
