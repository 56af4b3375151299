//! Reusable grid and elevator layouts.
//!
//! - [`grid`] / [`elevators`]: build from literal sizes and pairs.
//! - [`checkerboard`]: every `period`-th cell on both axes, offset per row
//!   band, the pattern used when comparing elevator densities.
//! - [`diagonal_stripes`]: one elevator per column on a wrapped diagonal.

use liftmap_core::Cell;
use liftmap_space::{ElevatorSet, TorusGrid};

/// A torus of the given size.
pub fn grid(x_size: u32, y_size: u32) -> TorusGrid {
    TorusGrid::new(x_size, y_size)
        .unwrap_or_else(|e| panic!("invalid fixture grid {x_size}x{y_size}: {e}"))
}

/// Elevators at `pairs`, in order, on an `x_size * y_size` torus.
pub fn elevators(x_size: u32, y_size: u32, pairs: &[(u32, u32)]) -> ElevatorSet {
    ElevatorSet::new(grid(x_size, y_size), pairs.iter().map(|&p| Cell::from(p)))
        .unwrap_or_else(|e| panic!("invalid fixture elevators {pairs:?}: {e}"))
}

/// Elevators on a staggered lattice with spacing `period`.
///
/// Row bands alternate their column phase by `period / 2`, giving a
/// checkerboard of service areas.
pub fn checkerboard(x_size: u32, y_size: u32, period: u32) -> ElevatorSet {
    assert!(period > 0, "checkerboard period must be positive");
    let g = grid(x_size, y_size);
    let mut cells = Vec::new();
    for (band, y) in (0..y_size).step_by(period as usize).enumerate() {
        let phase = if band % 2 == 0 { 0 } else { period / 2 };
        for x in (phase..x_size).step_by(period as usize) {
            cells.push(Cell::new(x, y));
        }
    }
    ElevatorSet::new(g, cells).unwrap_or_else(|e| panic!("invalid checkerboard: {e}"))
}

/// One elevator per column at `(x, (x * step) mod y_size)`.
///
/// Distinct for every `step` since each column holds exactly one elevator.
pub fn diagonal_stripes(x_size: u32, y_size: u32, step: u32) -> ElevatorSet {
    let g = grid(x_size, y_size);
    let cells = (0..x_size).map(|x| {
        let y = (u64::from(x) * u64::from(step)) % u64::from(y_size);
        Cell::new(x, y as u32)
    });
    ElevatorSet::new(g, cells).unwrap_or_else(|e| panic!("invalid diagonal stripes: {e}"))
}
