//! Test fixtures and brute-force oracles for liftmap development.
//!
//! Fixture constructors panic on invalid input: they are for tests only.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{checkerboard, diagonal_stripes, elevators, grid};

use liftmap_core::Cell;
use liftmap_space::ElevatorSet;

/// Smallest forward hop count from `cell` to any elevator, by checking
/// every elevator. `None` for an empty set.
///
/// Independent of ring traversal; used as the oracle for the search.
pub fn brute_force_nearest_distance(elevators: &ElevatorSet, cell: Cell) -> Option<u32> {
    let grid = elevators.grid();
    elevators
        .iter()
        .map(|e| grid.forward_distance(cell, e))
        .min()
}

/// Every elevator at the minimal forward hop count from `cell`.
pub fn brute_force_nearest_set(elevators: &ElevatorSet, cell: Cell) -> Vec<Cell> {
    let grid = elevators.grid();
    match brute_force_nearest_distance(elevators, cell) {
        Some(best) => elevators
            .iter()
            .filter(|&e| grid.forward_distance(cell, e) == best)
            .collect(),
        None => Vec::new(),
    }
}
