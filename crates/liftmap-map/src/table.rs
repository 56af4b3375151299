//! Dense cell → elevator lookup table.

use liftmap_core::{Cell, ElevatorId};
use liftmap_space::{ElevatorSet, TorusGrid};
use tracing::debug;

use crate::error::MapError;
use crate::search::{nearest_elevator, ProximitySearch};

/// The elevator assigned to every cell of a grid.
///
/// Stored column-major (`index = x * y_size + y`), which is also the
/// export order. A table is either complete or does not exist: building
/// fails as a whole if any cell has no reachable elevator.
///
/// # Examples
///
/// ```
/// use liftmap_core::Cell;
/// use liftmap_map::MappingTable;
/// use liftmap_space::{ElevatorSet, TorusGrid, TraversalPolicy};
///
/// let grid = TorusGrid::new(3, 2).unwrap();
/// let set = ElevatorSet::new(grid, [Cell::new(1, 0)]).unwrap();
/// let table = MappingTable::build(&set, &TraversalPolicy::MiddleOut).unwrap();
///
/// assert_eq!(table.get(Cell::new(2, 1)), Some(Cell::new(1, 0)));
/// assert_eq!(table.flatten(), vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    grid: TorusGrid,
    targets: Vec<Cell>,
}

impl MappingTable {
    /// Search every cell of `elevators.grid()`.
    ///
    /// With the `parallel` feature the cells are searched on the rayon
    /// pool; the result is identical to the sequential build.
    pub fn build(
        elevators: &ElevatorSet,
        search: &dyn ProximitySearch,
    ) -> Result<Self, MapError> {
        let grid = *elevators.grid();
        debug!(
            x_size = grid.x_size(),
            y_size = grid.y_size(),
            elevators = elevators.len(),
            search = search.name(),
            "building mapping table"
        );
        let targets = search_all(&grid, elevators, search)?;
        Ok(Self { grid, targets })
    }

    /// Wrap already computed targets (column-major).
    ///
    /// Checks the count and that every target lies in the grid; membership
    /// in an elevator set is checked separately by
    /// [`check_closure`](Self::check_closure).
    pub fn from_targets(grid: TorusGrid, targets: Vec<Cell>) -> Result<Self, MapError> {
        if targets.len() != grid.cell_count() {
            return Err(MapError::TableSizeMismatch {
                expected: grid.cell_count(),
                found: targets.len(),
            });
        }
        for &target in &targets {
            grid.check_cell(target)?;
        }
        Ok(Self { grid, targets })
    }

    /// Inflate a flat `x, y, x, y, ...` list written by [`flatten`](Self::flatten).
    pub fn from_flat(grid: TorusGrid, values: &[u32]) -> Result<Self, MapError> {
        let expected = grid.cell_count() * 2;
        if values.len() != expected {
            return Err(MapError::TableSizeMismatch {
                expected,
                found: values.len(),
            });
        }
        let targets = values
            .chunks_exact(2)
            .map(|pair| Cell::new(pair[0], pair[1]))
            .collect();
        Self::from_targets(grid, targets)
    }

    /// Grid this table covers.
    pub fn grid(&self) -> &TorusGrid {
        &self.grid
    }

    /// The elevator assigned to `cell`, or `None` if `cell` is off the grid.
    pub fn get(&self, cell: Cell) -> Option<Cell> {
        self.grid
            .column_major_rank(cell)
            .map(|rank| self.targets[rank])
    }

    /// Targets in column-major order.
    pub fn targets(&self) -> &[Cell] {
        &self.targets
    }

    /// `(cell, elevator)` pairs in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.grid.cells().zip(self.targets.iter().copied())
    }

    /// Flatten to `x, y` pairs in column-major cell order.
    pub fn flatten(&self) -> Vec<u32> {
        self.targets.iter().flat_map(|t| [t.x, t.y]).collect()
    }

    /// Check that every entry is a member of `elevators`.
    pub fn check_closure(&self, elevators: &ElevatorSet) -> Result<(), MapError> {
        check_same_grid(elevators.grid(), &self.grid)?;
        match self.iter().find(|&(_, target)| !elevators.contains(target)) {
            Some((cell, target)) => Err(MapError::NotAnElevator { cell, target }),
            None => Ok(()),
        }
    }

    /// Number of cells served by each elevator, indexed by [`ElevatorId`].
    ///
    /// Entries that are not in `elevators` are not counted.
    pub fn cells_per_elevator(&self, elevators: &ElevatorSet) -> Vec<usize> {
        let mut counts = vec![0; elevators.len()];
        for &target in &self.targets {
            if let Some(ElevatorId(id)) = elevators.id_of(target) {
                counts[id as usize] += 1;
            }
        }
        counts
    }
}

pub(crate) fn check_same_grid(expected: &TorusGrid, found: &TorusGrid) -> Result<(), MapError> {
    if expected != found {
        return Err(MapError::GridMismatch {
            expected: (expected.x_size(), expected.y_size()),
            found: (found.x_size(), found.y_size()),
        });
    }
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn search_all(
    grid: &TorusGrid,
    elevators: &ElevatorSet,
    search: &dyn ProximitySearch,
) -> Result<Vec<Cell>, MapError> {
    grid.cells()
        .map(|cell| nearest_elevator(search, elevators, cell))
        .collect()
}

#[cfg(feature = "parallel")]
fn search_all(
    grid: &TorusGrid,
    elevators: &ElevatorSet,
    search: &dyn ProximitySearch,
) -> Result<Vec<Cell>, MapError> {
    use rayon::prelude::*;

    let y_size = grid.y_size() as usize;
    (0..grid.cell_count())
        .into_par_iter()
        .map(|rank| {
            let cell = Cell::new((rank / y_size) as u32, (rank % y_size) as u32);
            nearest_elevator(search, elevators, cell)
        })
        .collect()
}
