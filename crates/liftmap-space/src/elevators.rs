//! The validated, insertion-ordered set of elevator cells.

use crate::error::SpaceError;
use crate::grid::TorusGrid;
use indexmap::IndexSet;
use liftmap_core::{Cell, ElevatorId};

/// Elevator cells of one grid, in input order, without duplicates.
///
/// Membership is O(1). Order only matters for display labels: the n-th
/// elevator always gets the n-th label. Immutable once built.
///
/// # Examples
///
/// ```
/// use liftmap_core::{Cell, ElevatorId};
/// use liftmap_space::{ElevatorSet, TorusGrid};
///
/// let grid = TorusGrid::new(4, 4).unwrap();
/// let set = ElevatorSet::new(grid, [Cell::new(2, 0), Cell::new(0, 3)]).unwrap();
/// assert!(set.contains(Cell::new(0, 3)));
/// assert_eq!(set.id_of(Cell::new(0, 3)), Some(ElevatorId(1)));
///
/// // Duplicates are rejected.
/// assert!(ElevatorSet::new(grid, [Cell::new(1, 1), Cell::new(1, 1)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSet {
    grid: TorusGrid,
    cells: IndexSet<Cell>,
}

impl ElevatorSet {
    /// Build a set from cells in order, validating bounds and uniqueness.
    pub fn new(
        grid: TorusGrid,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, SpaceError> {
        let mut set = Self::empty(grid);
        for cell in cells {
            set.insert(cell)?;
        }
        Ok(set)
    }

    /// A set with no elevators. Every search over it comes up empty.
    pub fn empty(grid: TorusGrid) -> Self {
        Self {
            grid,
            cells: IndexSet::new(),
        }
    }

    /// Append one elevator. Only used while the set is being built.
    pub(crate) fn insert(&mut self, cell: Cell) -> Result<ElevatorId, SpaceError> {
        let cell = self.grid.check_cell(cell)?;
        let (index, inserted) = self.cells.insert_full(cell);
        if !inserted {
            return Err(SpaceError::DuplicateElevator { cell });
        }
        Ok(ElevatorId(index as u32))
    }

    /// The grid these elevators live on.
    pub fn grid(&self) -> &TorusGrid {
        &self.grid
    }

    /// Whether `cell` is an elevator.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Input position of the elevator at `cell`.
    pub fn id_of(&self, cell: Cell) -> Option<ElevatorId> {
        self.cells.get_index_of(&cell).map(|i| ElevatorId(i as u32))
    }

    /// The elevator with the given id.
    pub fn get(&self, id: ElevatorId) -> Option<Cell> {
        self.cells.get_index(id.0 as usize).copied()
    }

    /// Number of elevators.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the set has no elevators.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Elevators in input order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl<'a> IntoIterator for &'a ElevatorSet {
    type Item = Cell;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}
