//! Benchmark layouts for liftmap.
//!
//! - [`reference_layout`]: 100x100 torus with a staggered lattice of 200
//!   elevators, a typical interconnect density
//! - [`sparse_layout`]: 64x64 torus with four elevators, so most searches
//!   run many rings
//! - [`scattered_layout`]: deterministic pseudo-random placement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use liftmap_core::Cell;
use liftmap_space::{ElevatorSet, SpaceError, TorusGrid};

/// 100x100 torus, elevators every 10 cells along x and every 5 rows,
/// alternate rows shifted by 5.
pub fn reference_layout() -> Result<ElevatorSet, SpaceError> {
    let grid = TorusGrid::new(100, 100)?;
    let cells = (0..100u32).step_by(5).flat_map(|y| {
        let phase = if (y / 5) % 2 == 0 { 0 } else { 5 };
        (phase..100).step_by(10).map(move |x| Cell::new(x, y))
    });
    ElevatorSet::new(grid, cells)
}

/// 64x64 torus with one elevator near each corner of a centred square.
pub fn sparse_layout() -> Result<ElevatorSet, SpaceError> {
    let grid = TorusGrid::new(64, 64)?;
    ElevatorSet::new(
        grid,
        [
            Cell::new(16, 16),
            Cell::new(48, 16),
            Cell::new(16, 48),
            Cell::new(48, 48),
        ],
    )
}

/// `count` distinct elevators on an `x_size * y_size` torus, placed by a
/// fixed linear congruential sequence from `seed`.
///
/// `count` is capped at the number of cells.
pub fn scattered_layout(
    x_size: u32,
    y_size: u32,
    count: usize,
    seed: u64,
) -> Result<ElevatorSet, SpaceError> {
    let grid = TorusGrid::new(x_size, y_size)?;
    let count = count.min(grid.cell_count());
    let mut taken = vec![false; grid.cell_count()];
    let mut cells = Vec::with_capacity(count);
    let mut state = seed;
    while cells.len() < count {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let rank = ((state >> 33) % grid.cell_count() as u64) as usize;
        if !taken[rank] {
            taken[rank] = true;
            if let Some(cell) = grid.cell_at_rank(rank) {
                cells.push(cell);
            }
        }
    }
    ElevatorSet::new(grid, cells)
}
