//! Grid compliance test helpers.
//!
//! Exhaustive checks of the distance and ordering contracts of
//! [`TorusGrid`]. Only suitable for small grids (the triangle check is
//! cubic in the cell count).

use crate::grid::TorusGrid;
use indexmap::IndexSet;

/// Assert that both distances are zero from a cell to itself.
pub fn assert_distance_reflexive(grid: &TorusGrid) {
    for cell in grid.cells() {
        assert_eq!(grid.forward_distance(cell, cell), 0, "forward({cell}, {cell})");
        assert_eq!(grid.toroidal_distance(cell, cell), 0, "toroidal({cell}, {cell})");
    }
}

/// Assert that `toroidal(a, b) == toroidal(b, a)` for all pairs.
pub fn assert_toroidal_symmetric(grid: &TorusGrid) {
    let cells: Vec<_> = grid.cells().collect();
    for &a in &cells {
        for &b in &cells {
            let dab = grid.toroidal_distance(a, b);
            let dba = grid.toroidal_distance(b, a);
            assert_eq!(dab, dba, "toroidal({a}, {b}) = {dab} != toroidal({b}, {a}) = {dba}");
        }
    }
}

/// Assert `d(a, c) <= d(a, b) + d(b, c)` for both distances.
pub fn assert_triangle_inequality(grid: &TorusGrid) {
    let cells: Vec<_> = grid.cells().collect();
    for &a in &cells {
        for &b in &cells {
            for &c in &cells {
                let f = grid.forward_distance(a, c);
                let fb = grid.forward_distance(a, b) + grid.forward_distance(b, c);
                assert!(f <= fb, "forward triangle violated: {a} {b} {c}");
                let t = grid.toroidal_distance(a, c);
                let tb = grid.toroidal_distance(a, b) + grid.toroidal_distance(b, c);
                assert!(t <= tb, "toroidal triangle violated: {a} {b} {c}");
            }
        }
    }
}

/// Assert that going forward is never shorter than the symmetric distance
/// and never exceeds the maximum ring radius.
pub fn assert_forward_bounded(grid: &TorusGrid) {
    let cells: Vec<_> = grid.cells().collect();
    for &a in &cells {
        for &b in &cells {
            let f = grid.forward_distance(a, b);
            assert!(f >= grid.toroidal_distance(a, b), "forward({a}, {b}) below toroidal");
            assert!(f <= grid.max_radius(), "forward({a}, {b}) = {f} beyond max radius");
        }
    }
}

/// Assert that `cells()` yields every cell exactly once, deterministically.
pub fn assert_cells_complete(grid: &TorusGrid) {
    let a: Vec<_> = grid.cells().collect();
    let b: Vec<_> = grid.cells().collect();
    assert_eq!(a, b, "cells() is non-deterministic");
    assert_eq!(a.len(), grid.cell_count());
    let unique: IndexSet<_> = a.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "cells() has duplicates");
    assert!(a.iter().all(|&cell| grid.contains(cell)));
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &TorusGrid) {
    assert_distance_reflexive(grid);
    assert_toroidal_symmetric(grid);
    assert_triangle_inequality(grid);
    assert_forward_bounded(grid);
    assert_cells_complete(grid);
}
