//! 2D torus (wraparound on both axes).

use crate::error::SpaceError;
use liftmap_core::Cell;

/// A two-dimensional grid with periodic boundaries on both axes.
///
/// Cells are `(x, y)` with `0 <= x < x_size` and `0 <= y < y_size`.
/// Moving past the last column or row wraps to 0. The grid is an
/// immutable value; every other structure in liftmap borrows or copies it.
///
/// Two distances are defined:
/// - [`forward_distance`](Self::forward_distance): hops when only
///   increasing-index links exist (unidirectional torus). This is the
///   radius at which ring expansion first reaches a cell.
/// - [`toroidal_distance`](Self::toroidal_distance): symmetric Manhattan
///   distance with the shorter way round on each axis.
///
/// # Examples
///
/// ```
/// use liftmap_core::Cell;
/// use liftmap_space::TorusGrid;
///
/// let grid = TorusGrid::new(4, 4).unwrap();
/// assert_eq!(grid.cell_count(), 16);
/// assert_eq!(grid.offset(Cell::new(3, 3), 1, 2), Cell::new(0, 1));
///
/// // (0,0) -> (3,0) is 3 hops forward but 1 hop the other way round.
/// assert_eq!(grid.forward_distance(Cell::new(0, 0), Cell::new(3, 0)), 3);
/// assert_eq!(grid.toroidal_distance(Cell::new(0, 0), Cell::new(3, 0)), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TorusGrid {
    x_size: u32,
    y_size: u32,
}

impl TorusGrid {
    /// Maximum dimension size. Keeps every ring radius
    /// (`(x_size - 1) + (y_size - 1)`) inside `u32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new `x_size * y_size` torus.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(x_size: u32, y_size: u32) -> Result<Self, SpaceError> {
        if x_size == 0 || y_size == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if x_size > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "x_size",
                value: x_size,
                max: Self::MAX_DIM,
            });
        }
        if y_size > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "y_size",
                value: y_size,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { x_size, y_size })
    }

    /// Number of columns.
    pub fn x_size(&self) -> u32 {
        self.x_size
    }

    /// Number of rows.
    pub fn y_size(&self) -> u32 {
        self.y_size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.x_size as usize) * (self.y_size as usize)
    }

    /// Largest ring radius needed to reach every cell from any origin.
    pub fn max_radius(&self) -> u32 {
        (self.x_size - 1) + (self.y_size - 1)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.x_size && cell.y < self.y_size
    }

    /// Validate a signed coordinate pair and convert it to a [`Cell`].
    pub fn checked_cell(&self, x: i64, y: i64) -> Result<Cell, SpaceError> {
        if x < 0 || x >= i64::from(self.x_size) || y < 0 || y >= i64::from(self.y_size) {
            return Err(SpaceError::CellOutOfBounds {
                x,
                y,
                bounds: self.bounds_description(),
            });
        }
        Ok(Cell::new(x as u32, y as u32))
    }

    /// Return `cell` unchanged if it lies inside the grid.
    pub fn check_cell(&self, cell: Cell) -> Result<Cell, SpaceError> {
        self.checked_cell(i64::from(cell.x), i64::from(cell.y))
    }

    /// Move `dx` columns and `dy` rows forward from `cell`, wrapping on both axes.
    ///
    /// `cell` must lie inside the grid; offsets may be arbitrarily large.
    pub fn offset(&self, cell: Cell, dx: u32, dy: u32) -> Cell {
        Cell::new(
            wrap_add(cell.x, dx, self.x_size),
            wrap_add(cell.y, dy, self.y_size),
        )
    }

    /// Hops from `from` to `to` using only increasing-index links.
    pub fn forward_distance(&self, from: Cell, to: Cell) -> u32 {
        forward_axis(from.x, to.x, self.x_size) + forward_axis(from.y, to.y, self.y_size)
    }

    /// Manhattan distance taking the shorter way round on each axis.
    ///
    /// `min(|dx|, x_size - |dx|) + min(|dy|, y_size - |dy|)`.
    pub fn toroidal_distance(&self, a: Cell, b: Cell) -> u32 {
        axis_distance(a.x, b.x, self.x_size) + axis_distance(a.y, b.y, self.y_size)
    }

    /// All cells in column-major order: `(0,0), (0,1), ..., (x_size-1, y_size-1)`.
    ///
    /// This is the order in which mapping tables are stored and exported.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.x_size).flat_map(move |x| (0..self.y_size).map(move |y| Cell::new(x, y)))
    }

    /// Position of `cell` in [`cells`](Self::cells), or `None` if out of bounds.
    pub fn column_major_rank(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.x as usize) * (self.y_size as usize) + cell.y as usize)
    }

    /// Inverse of [`column_major_rank`](Self::column_major_rank).
    pub fn cell_at_rank(&self, rank: usize) -> Option<Cell> {
        if rank >= self.cell_count() {
            return None;
        }
        let y_size = self.y_size as usize;
        Some(Cell::new((rank / y_size) as u32, (rank % y_size) as u32))
    }

    fn bounds_description(&self) -> String {
        format!("[0, {}) x [0, {})", self.x_size, self.y_size)
    }
}

/// `(v + d) mod len` without overflow.
fn wrap_add(v: u32, d: u32, len: u32) -> u32 {
    ((u64::from(v) + u64::from(d)) % u64::from(len)) as u32
}

/// Forward steps from `a` to `b` on a ring of `len` cells.
fn forward_axis(a: u32, b: u32, len: u32) -> u32 {
    if b >= a {
        b - a
    } else {
        len - (a - b)
    }
}

/// 1D distance along a single wrapped axis.
fn axis_distance(a: u32, b: u32, len: u32) -> u32 {
    let diff = a.abs_diff(b);
    diff.min(len - diff)
}
