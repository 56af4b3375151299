//! Reading assignments back from configuration text.
//!
//! A configuration file holds many unrelated settings; only lines of the
//! form `name={...}` are considered. When a name occurs more than once the
//! last statement wins, matching the effect of repeated appends.

use std::fs;
use std::path::Path;

use liftmap_core::Cell;
use liftmap_map::MappingTable;
use liftmap_space::{ElevatorSet, TorusGrid};
use tracing::debug;

use crate::codec::{decode_statement, Assignment};
use crate::error::ExportError;

/// Every assignment statement in `text`, in file order.
pub fn parse_assignments(text: &str) -> Vec<Assignment> {
    text.lines().filter_map(decode_statement).collect()
}

/// The last statement called `name`.
pub fn find_assignment<'a>(
    assignments: &'a [Assignment],
    name: &str,
) -> Result<&'a Assignment, ExportError> {
    assignments
        .iter()
        .rev()
        .find(|a| a.name == name)
        .ok_or_else(|| ExportError::MissingAssignment {
            name: name.to_string(),
        })
}

/// Read configuration text from a file.
pub fn load_config(path: impl AsRef<Path>) -> Result<String, ExportError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ExportError::ConfigMissing {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "loaded configuration");
    Ok(text)
}

/// Inflate the mapping statement `name` into a table for `grid`.
///
/// The statement must hold exactly `2 * x_size * y_size` values, as
/// column-major `x, y` pairs that lie on the grid.
pub fn read_elevator_mapping(
    text: &str,
    name: &str,
    grid: TorusGrid,
) -> Result<MappingTable, ExportError> {
    let assignments = parse_assignments(text);
    let values = find_assignment(&assignments, name)?.integers()?;
    let expected = grid.cell_count() * 2;
    if values.len() != expected {
        return Err(ExportError::CountMismatch {
            expected,
            found: values.len(),
        });
    }
    let targets = to_cells(&values, grid)?;
    Ok(MappingTable::from_targets(grid, targets)?)
}

/// Rebuild the elevator set stored in statement `name`.
///
/// Bounds and duplicates are validated as for an elevator source.
pub fn read_elevator_coords(
    text: &str,
    name: &str,
    grid: TorusGrid,
) -> Result<ElevatorSet, ExportError> {
    let assignments = parse_assignments(text);
    let values = find_assignment(&assignments, name)?.integers()?;
    if values.len() % 2 != 0 {
        return Err(ExportError::OddCoordinateCount {
            name: name.to_string(),
            found: values.len(),
        });
    }
    let cells = to_cells(&values, grid)?;
    Ok(ElevatorSet::new(grid, cells)?)
}

fn to_cells(values: &[i64], grid: TorusGrid) -> Result<Vec<Cell>, ExportError> {
    values
        .chunks_exact(2)
        .map(|pair| grid.checked_cell(pair[0], pair[1]).map_err(ExportError::from))
        .collect()
}
