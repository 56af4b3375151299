//! Strongly-typed identifiers and the [`Cell`] coordinate.

use std::fmt;

/// A node of a 2D grid, addressed by column `x` and row `y`.
///
/// Coordinates are unsigned: every cell that exists lives in
/// `[0, x_size) x [0, y_size)`. Ordering is lexicographic on `(x, y)`,
/// which matches the column-major export order of a mapping table.
///
/// # Examples
///
/// ```
/// use liftmap_core::Cell;
///
/// let c = Cell::new(3, 1);
/// assert_eq!(c.x, 3);
/// assert_eq!(c.to_string(), "(3, 1)");
/// assert!(Cell::new(0, 9) < Cell::new(1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Cell {
    /// Create a cell from its column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}

/// Position of an elevator within its elevator set.
///
/// `ElevatorId(n)` is the n-th elevator in input order. Used to assign
/// display labels, which must be stable across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElevatorId(pub u32);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ElevatorId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cell_display() {
        assert_eq!(Cell::new(0, 0).to_string(), "(0, 0)");
        assert_eq!(Cell::new(12, 7).to_string(), "(12, 7)");
    }

    #[test]
    fn cell_tuple_conversions() {
        let c: Cell = (4, 5).into();
        assert_eq!(c, Cell::new(4, 5));
        let t: (u32, u32) = c.into();
        assert_eq!(t, (4, 5));
    }

    #[test]
    fn cell_order_is_column_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(0, 0)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn elevator_id_display() {
        assert_eq!(ElevatorId(17).to_string(), "17");
        assert_eq!(ElevatorId::from(3), ElevatorId(3));
    }

    proptest! {
        #[test]
        fn cell_order_matches_tuple_order(
            ax in 0u32..64, ay in 0u32..64,
            bx in 0u32..64, by in 0u32..64,
        ) {
            let a = Cell::new(ax, ay);
            let b = Cell::new(bx, by);
            prop_assert_eq!(a.cmp(&b), (ax, ay).cmp(&(bx, by)));
        }
    }
}
