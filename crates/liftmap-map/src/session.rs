//! An elevator set together with its mapping table.

use liftmap_space::{ElevatorSet, TorusGrid};
use tracing::debug;

use crate::error::MapError;
use crate::legend::render;
use crate::search::ProximitySearch;
use crate::table::MappingTable;

/// Elevators plus the table built from them, once it exists.
///
/// Operations that need the table ([`mapping`](Self::mapping),
/// [`visualize`](Self::visualize), and the exporters built on them) fail
/// with [`MapError::MappingNotBuilt`] until
/// [`create_mapping`](Self::create_mapping) has succeeded.
///
/// # Examples
///
/// ```
/// use liftmap_core::Cell;
/// use liftmap_map::{ElevatorMapping, MapError};
/// use liftmap_space::{ElevatorSet, TorusGrid, TraversalPolicy};
///
/// let grid = TorusGrid::new(2, 2).unwrap();
/// let set = ElevatorSet::new(grid, [Cell::new(0, 0)]).unwrap();
/// let mut mapping = ElevatorMapping::new(set);
/// assert_eq!(mapping.visualize(), Err(MapError::MappingNotBuilt));
///
/// mapping.create_mapping(&TraversalPolicy::MiddleOut).unwrap();
/// assert_eq!(mapping.visualize().unwrap(), "O\n Aa\n aa\n");
/// ```
#[derive(Debug, Clone)]
pub struct ElevatorMapping {
    elevators: ElevatorSet,
    table: Option<MappingTable>,
}

impl ElevatorMapping {
    /// Start from a validated elevator set; no table yet.
    pub fn new(elevators: ElevatorSet) -> Self {
        Self {
            elevators,
            table: None,
        }
    }

    /// The grid being mapped.
    pub fn grid(&self) -> &TorusGrid {
        self.elevators.grid()
    }

    /// The elevators being mapped.
    pub fn elevators(&self) -> &ElevatorSet {
        &self.elevators
    }

    /// Build (or rebuild) the table with `search`.
    ///
    /// On failure any previous table is kept unchanged.
    pub fn create_mapping(
        &mut self,
        search: &dyn ProximitySearch,
    ) -> Result<&MappingTable, MapError> {
        let table = MappingTable::build(&self.elevators, search)?;
        debug!(cells = table.targets().len(), "mapping table ready");
        Ok(self.table.insert(table))
    }

    /// Whether a table has been built.
    pub fn is_built(&self) -> bool {
        self.table.is_some()
    }

    /// The built table.
    pub fn mapping(&self) -> Result<&MappingTable, MapError> {
        self.table.as_ref().ok_or(MapError::MappingNotBuilt)
    }

    /// Draw the built table.
    pub fn visualize(&self) -> Result<String, MapError> {
        render(&self.elevators, self.mapping()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftmap_core::Cell;
    use liftmap_space::TraversalPolicy;
    use liftmap_test_utils::{elevators, grid};

    #[test]
    fn mapping_before_build_fails() {
        let m = ElevatorMapping::new(elevators(3, 3, &[(1, 1)]));
        assert!(!m.is_built());
        assert_eq!(m.mapping().unwrap_err(), MapError::MappingNotBuilt);
    }

    #[test]
    fn build_then_read() {
        let mut m = ElevatorMapping::new(elevators(3, 3, &[(1, 1)]));
        m.create_mapping(&TraversalPolicy::PrioritizeY).unwrap();
        assert!(m.is_built());
        assert_eq!(m.mapping().unwrap().get(Cell::new(0, 0)), Some(Cell::new(1, 1)));
    }

    #[test]
    fn rebuild_with_other_policy_replaces_table() {
        let mut m = ElevatorMapping::new(elevators(5, 5, &[(0, 2), (1, 1)]));
        m.create_mapping(&TraversalPolicy::PrioritizeY).unwrap();
        assert_eq!(m.mapping().unwrap().get(Cell::new(0, 0)), Some(Cell::new(0, 2)));
        m.create_mapping(&TraversalPolicy::MiddleOut).unwrap();
        assert_eq!(m.mapping().unwrap().get(Cell::new(0, 0)), Some(Cell::new(1, 1)));
    }

    #[test]
    fn failed_build_leaves_no_table() {
        let mut m = ElevatorMapping::new(ElevatorSet::empty(grid(2, 2)));
        assert!(m.create_mapping(&TraversalPolicy::MiddleOut).is_err());
        assert!(!m.is_built());
        assert_eq!(m.visualize(), Err(MapError::MappingNotBuilt));
    }
}
