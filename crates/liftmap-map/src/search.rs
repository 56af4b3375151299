//! Nearest-elevator search.
//!
//! The ring expansion visits radii `0, 1, ..., max_radius` and, inside each
//! radius, the forward offsets in [`TraversalPolicy`] order. The first
//! elevator met is returned. Radii grow monotonically, so the result is
//! nearest by forward hop count; within a radius the policy order alone
//! decides, never the order of the elevator set.

use liftmap_core::Cell;
use liftmap_space::{ElevatorSet, TraversalPolicy};
use tracing::trace;

use crate::error::MapError;

/// A strategy that picks the nearest elevator of a cell.
///
/// `Send + Sync` so one search can serve a parallel table build.
pub trait ProximitySearch: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// The elevator assigned to `cell`, or `None` if none is reachable.
    ///
    /// `cell` must lie on `elevators.grid()`.
    fn find_nearest(&self, elevators: &ElevatorSet, cell: Cell) -> Option<Cell>;
}

impl ProximitySearch for TraversalPolicy {
    fn name(&self) -> &str {
        TraversalPolicy::name(*self)
    }

    fn find_nearest(&self, elevators: &ElevatorSet, cell: Cell) -> Option<Cell> {
        ring_search(*self, elevators, cell).map(|hit| hit.elevator)
    }
}

/// Result of a successful ring search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// The elevator found.
    pub elevator: Cell,
    /// Ring radius at which it was found (forward hop count).
    pub radius: u32,
}

/// Ring-expansion search from `origin` in `policy` order.
///
/// # Examples
///
/// ```
/// use liftmap_core::Cell;
/// use liftmap_map::ring_search;
/// use liftmap_space::{ElevatorSet, TorusGrid, TraversalPolicy};
///
/// let grid = TorusGrid::new(5, 5).unwrap();
/// let set = ElevatorSet::new(grid, [Cell::new(0, 2), Cell::new(1, 1)]).unwrap();
///
/// // Both elevators are two hops from (0, 0); the policy breaks the tie.
/// let py = ring_search(TraversalPolicy::PrioritizeY, &set, Cell::new(0, 0)).unwrap();
/// let mo = ring_search(TraversalPolicy::MiddleOut, &set, Cell::new(0, 0)).unwrap();
/// assert_eq!((py.elevator, py.radius), (Cell::new(0, 2), 2));
/// assert_eq!((mo.elevator, mo.radius), (Cell::new(1, 1), 2));
/// ```
pub fn ring_search(
    policy: TraversalPolicy,
    elevators: &ElevatorSet,
    origin: Cell,
) -> Option<SearchHit> {
    if elevators.is_empty() {
        return None;
    }
    let grid = elevators.grid();
    for radius in 0..=grid.max_radius() {
        for (dx, dy) in policy.ring(radius) {
            let candidate = grid.offset(origin, dx, dy);
            if elevators.contains(candidate) {
                return Some(SearchHit {
                    elevator: candidate,
                    radius,
                });
            }
        }
    }
    None
}

/// Run `search` for one cell, turning a miss into
/// [`MapError::NoElevatorReachable`].
pub fn nearest_elevator(
    search: &dyn ProximitySearch,
    elevators: &ElevatorSet,
    cell: Cell,
) -> Result<Cell, MapError> {
    elevators.grid().check_cell(cell)?;
    search.find_nearest(elevators, cell).ok_or_else(|| {
        trace!(%cell, search = search.name(), "no elevator reachable");
        MapError::NoElevatorReachable { cell }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftmap_space::TorusGrid;
    use liftmap_test_utils::{brute_force_nearest_distance, elevators};
    use proptest::prelude::*;

    fn c(x: u32, y: u32) -> Cell {
        Cell::new(x, y)
    }

    #[test]
    fn elevator_cell_finds_itself_at_radius_zero() {
        let set = elevators(6, 6, &[(2, 3), (5, 5)]);
        for policy in TraversalPolicy::ALL {
            let hit = ring_search(policy, &set, c(2, 3)).unwrap();
            assert_eq!(hit, SearchHit { elevator: c(2, 3), radius: 0 });
        }
    }

    #[test]
    fn empty_set_reaches_nothing() {
        let set = ElevatorSet::empty(TorusGrid::new(3, 3).unwrap());
        for policy in TraversalPolicy::ALL {
            assert_eq!(ring_search(policy, &set, c(1, 1)), None);
            assert_eq!(
                nearest_elevator(&policy, &set, c(1, 1)),
                Err(MapError::NoElevatorReachable { cell: c(1, 1) })
            );
        }
    }

    #[test]
    fn query_outside_grid_is_rejected() {
        let set = elevators(3, 3, &[(0, 0)]);
        assert!(matches!(
            nearest_elevator(&TraversalPolicy::MiddleOut, &set, c(3, 0)),
            Err(MapError::Space(_))
        ));
    }

    #[test]
    fn single_elevator_on_4x4_from_opposite_corner() {
        let set = elevators(4, 4, &[(0, 0)]);
        for policy in TraversalPolicy::ALL {
            let hit = ring_search(policy, &set, c(2, 2)).unwrap();
            assert_eq!(hit.elevator, c(0, 0));
            assert_eq!(hit.radius, 4);
            assert_eq!(set.grid().toroidal_distance(c(2, 2), c(0, 0)), 4);
        }
    }

    #[test]
    fn single_row_prefers_forward_neighbour() {
        // (2,0) is one hop forward; (0,0) is three hops forward by wrapping.
        let set = elevators(4, 1, &[(0, 0), (2, 0)]);
        for policy in TraversalPolicy::ALL {
            let hit = ring_search(policy, &set, c(1, 0)).unwrap();
            assert_eq!(hit, SearchHit { elevator: c(2, 0), radius: 1 });
        }
    }

    #[test]
    fn single_row_wraps_to_reach_earlier_column() {
        let set = elevators(4, 1, &[(0, 0)]);
        let hit = ring_search(TraversalPolicy::PrioritizeY, &set, c(3, 0)).unwrap();
        assert_eq!(hit, SearchHit { elevator: c(0, 0), radius: 1 });
    }

    #[test]
    fn tie_between_axis_and_diagonal() {
        let set = elevators(5, 5, &[(0, 2), (1, 1)]);
        assert_eq!(
            TraversalPolicy::PrioritizeY.find_nearest(&set, c(0, 0)),
            Some(c(0, 2))
        );
        assert_eq!(
            TraversalPolicy::MiddleOut.find_nearest(&set, c(0, 0)),
            Some(c(1, 1))
        );
    }

    #[test]
    fn tie_between_both_axes() {
        // (2,0) and (0,2) are both two hops from (0,0).
        let set = elevators(5, 5, &[(2, 0), (0, 2)]);
        // Prioritize-Y starts at the pure +y offset.
        assert_eq!(
            TraversalPolicy::PrioritizeY.find_nearest(&set, c(0, 0)),
            Some(c(0, 2))
        );
        // Middle-out visits (0,2) on step 1 and (2,0) on step 2.
        assert_eq!(
            TraversalPolicy::MiddleOut.find_nearest(&set, c(0, 0)),
            Some(c(0, 2))
        );
    }

    #[test]
    fn tie_on_odd_ring_favours_x_leaning_centre_in_middle_out() {
        // (2,1) and (1,2) are both three hops from (0,0).
        let set = elevators(6, 6, &[(1, 2), (2, 1)]);
        assert_eq!(
            TraversalPolicy::MiddleOut.find_nearest(&set, c(0, 0)),
            Some(c(2, 1))
        );
        assert_eq!(
            TraversalPolicy::PrioritizeY.find_nearest(&set, c(0, 0)),
            Some(c(1, 2))
        );
    }

    #[test]
    fn tie_break_ignores_elevator_order() {
        let a = elevators(5, 5, &[(0, 2), (1, 1)]);
        let b = elevators(5, 5, &[(1, 1), (0, 2)]);
        for policy in TraversalPolicy::ALL {
            assert_eq!(
                policy.find_nearest(&a, c(0, 0)),
                policy.find_nearest(&b, c(0, 0))
            );
        }
    }

    #[test]
    fn wraparound_tie_resolved_by_ring_order() {
        // On a 3x3 torus, from (1,1): (0,1) is two hops forward in x (wrap),
        // (1,0) is two hops forward in y (wrap), (2,2) is two hops diagonal.
        let set = elevators(3, 3, &[(0, 1), (1, 0), (2, 2)]);
        // Ring 2 in prioritize-y order: (0,2)->(1,0), (1,1)->(2,2), (2,0)->(0,1).
        assert_eq!(
            TraversalPolicy::PrioritizeY.find_nearest(&set, c(1, 1)),
            Some(c(1, 0))
        );
        // Middle-out starts at (1,1)->(2,2).
        assert_eq!(
            TraversalPolicy::MiddleOut.find_nearest(&set, c(1, 1)),
            Some(c(2, 2))
        );
    }

    #[test]
    fn search_names() {
        let s: &dyn ProximitySearch = &TraversalPolicy::PrioritizeY;
        assert_eq!(s.name(), "prioritize-y");
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_layout() -> impl Strategy<Value = (u32, u32, Vec<(u32, u32)>)> {
        (1u32..9, 1u32..9).prop_flat_map(|(xs, ys)| {
            let cells = proptest::collection::vec((0..xs, 0..ys), 1..6);
            (Just(xs), Just(ys), cells)
        })
    }

    proptest! {
        #[test]
        fn ring_search_is_forward_nearest((xs, ys, raw) in arb_layout(), qx in 0u32..9, qy in 0u32..9) {
            let mut seen = std::collections::HashSet::new();
            let pairs: Vec<_> = raw.into_iter().filter(|p| seen.insert(*p)).collect();
            let set = elevators(xs, ys, &pairs);
            let query = c(qx % xs, qy % ys);
            let best = brute_force_nearest_distance(&set, query).unwrap();
            for policy in TraversalPolicy::ALL {
                let hit = ring_search(policy, &set, query).unwrap();
                prop_assert!(set.contains(hit.elevator));
                prop_assert_eq!(hit.radius, best);
                prop_assert_eq!(set.grid().forward_distance(query, hit.elevator), best);
            }
        }
    }
}
