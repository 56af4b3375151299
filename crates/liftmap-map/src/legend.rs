//! Text rendering of a mapping table.
//!
//! Each elevator gets a label in input order. Small sets use one letter
//! per elevator; larger sets switch to numbered labels (`e0`, `e1`, ...)
//! so labels never collide. In the drawing an elevator cell shows its own
//! label upper-cased and every other cell shows the lower-case label of
//! the elevator it maps to:
//!
//! ```text
//! O
//!  Aab
//!  abB
//! ```

use liftmap_core::{Cell, ElevatorId};
use liftmap_space::ElevatorSet;

use crate::error::MapError;
use crate::table::{check_same_grid, MappingTable};

/// Single-letter labels, in assignment order. `x` is left out so that no
/// label can be confused with [`ERROR_MARKER`].
pub const GLYPHS: &str = "abcdefghijklmnopqrstuvwyz";

/// Drawn for a cell whose target has no label (inconsistent table).
pub const ERROR_MARKER: &str = "X";

/// First line of every drawing, marking the `(0, 0)` corner.
pub const ORIGIN_MARKER: &str = "O";

/// Labels for the elevators of one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    labels: Vec<String>,
    width: usize,
}

impl Legend {
    /// Assign labels to `elevators` in input order.
    pub fn new(elevators: &ElevatorSet) -> Self {
        let n = elevators.len();
        let labels: Vec<String> = if n <= GLYPHS.len() {
            GLYPHS.chars().take(n).map(String::from).collect()
        } else {
            (0..n).map(|i| format!("e{i}")).collect()
        };
        let width = labels.iter().map(String::len).max().unwrap_or(1);
        Self { labels, width }
    }

    /// Lower-case label of an elevator.
    pub fn label(&self, id: ElevatorId) -> Option<&str> {
        self.labels.get(id.0 as usize).map(String::as_str)
    }

    /// Width of the widest label.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether every label is a single letter.
    pub fn is_compact(&self) -> bool {
        self.width == 1
    }
}

/// Draw `table` with the labels of `elevators`.
///
/// One line per row (`y`), one column per `x`, below an origin marker.
/// Fails if the table and the elevator set cover different grids.
///
/// # Examples
///
/// ```
/// use liftmap_core::Cell;
/// use liftmap_map::{render, MappingTable};
/// use liftmap_space::{ElevatorSet, TorusGrid, TraversalPolicy};
///
/// let grid = TorusGrid::new(4, 1).unwrap();
/// let set = ElevatorSet::new(grid, [Cell::new(0, 0), Cell::new(2, 0)]).unwrap();
/// let table = MappingTable::build(&set, &TraversalPolicy::MiddleOut).unwrap();
/// assert_eq!(render(&set, &table).unwrap(), "O\n AbBa\n");
/// ```
pub fn render(elevators: &ElevatorSet, table: &MappingTable) -> Result<String, MapError> {
    check_same_grid(elevators.grid(), table.grid())?;
    let legend = Legend::new(elevators);
    let grid = table.grid();
    let width = legend.width();
    let sep = if legend.is_compact() { "" } else { " " };

    let mut out = String::with_capacity((grid.cell_count() + grid.y_size() as usize) * (width + 1));
    out.push_str(ORIGIN_MARKER);
    out.push('\n');
    for y in 0..grid.y_size() {
        out.push(' ');
        for x in 0..grid.x_size() {
            if x > 0 {
                out.push_str(sep);
            }
            let cell = Cell::new(x, y);
            let glyph = glyph_for(&legend, elevators, table, cell);
            out.push_str(&format!("{glyph:>width$}"));
        }
        out.push('\n');
    }
    Ok(out)
}

fn glyph_for(legend: &Legend, elevators: &ElevatorSet, table: &MappingTable, cell: Cell) -> String {
    if let Some(label) = elevators.id_of(cell).and_then(|id| legend.label(id)) {
        return label.to_uppercase();
    }
    table
        .get(cell)
        .and_then(|target| elevators.id_of(target))
        .and_then(|id| legend.label(id))
        .map_or_else(|| ERROR_MARKER.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftmap_space::{TorusGrid, TraversalPolicy};
    use liftmap_test_utils::{elevators, grid};

    fn c(x: u32, y: u32) -> Cell {
        Cell::new(x, y)
    }

    #[test]
    fn compact_labels_skip_x() {
        let pairs: Vec<(u32, u32)> = (0..25).map(|i| (i, 0)).collect();
        let set = elevators(25, 1, &pairs);
        let legend = Legend::new(&set);
        assert!(legend.is_compact());
        assert_eq!(legend.label(ElevatorId(0)), Some("a"));
        assert_eq!(legend.label(ElevatorId(22)), Some("w"));
        assert_eq!(legend.label(ElevatorId(23)), Some("y"));
        assert_eq!(legend.label(ElevatorId(24)), Some("z"));
        assert_eq!(legend.label(ElevatorId(25)), None);
    }

    #[test]
    fn large_sets_use_numbered_labels() {
        let pairs: Vec<(u32, u32)> = (0..30).map(|i| (i % 10, i / 10)).collect();
        let set = elevators(10, 3, &pairs);
        let legend = Legend::new(&set);
        assert!(!legend.is_compact());
        assert_eq!(legend.width(), 3);
        assert_eq!(legend.label(ElevatorId(0)), Some("e0"));
        assert_eq!(legend.label(ElevatorId(29)), Some("e29"));
    }

    #[test]
    fn empty_legend() {
        let legend = Legend::new(&ElevatorSet::empty(grid(2, 2)));
        assert_eq!(legend.width(), 1);
        assert_eq!(legend.label(ElevatorId(0)), None);
    }

    #[test]
    fn render_marks_elevators_upper_case() {
        let set = elevators(3, 2, &[(0, 0), (2, 1)]);
        let table = MappingTable::build(&set, &TraversalPolicy::PrioritizeY).unwrap();
        let drawing = render(&set, &table).unwrap();
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "O");
        assert_eq!(&lines[1][1..2], "A");
        assert_eq!(&lines[2][3..4], "B");
        for line in &lines[1..] {
            assert!(line.starts_with(' '));
            assert_eq!(line.len(), 4);
        }
    }

    #[test]
    fn render_single_row() {
        // (1,0) -> (2,0) one hop forward; (3,0) -> (0,0) by wrapping.
        let set = elevators(4, 1, &[(0, 0), (2, 0)]);
        let table = MappingTable::build(&set, &TraversalPolicy::PrioritizeY).unwrap();
        assert_eq!(render(&set, &table).unwrap(), "O\n AbBa\n");
    }

    #[test]
    fn render_numbered_labels_are_aligned() {
        let pairs: Vec<(u32, u32)> = (0..26).map(|i| (i, 0)).collect();
        let set = elevators(26, 2, &pairs);
        let table = MappingTable::build(&set, &TraversalPolicy::MiddleOut).unwrap();
        let drawing = render(&set, &table).unwrap();
        let lines: Vec<&str> = drawing.lines().collect();
        assert!(lines[1].starts_with("  E0  E1"), "{}", lines[1]);
        // Row 1 reaches row 0 by wrapping forward in y.
        assert!(lines[2].starts_with("  e0  e1"), "{}", lines[2]);
        assert_eq!(lines[1].len(), lines[2].len());
    }

    #[test]
    fn inconsistent_table_shows_error_marker() {
        let set = elevators(2, 1, &[(0, 0)]);
        let table = MappingTable::from_targets(grid(2, 1), vec![c(0, 0), c(1, 0)]).unwrap();
        assert_eq!(render(&set, &table).unwrap(), "O\n AX\n");
    }

    #[test]
    fn render_rejects_grid_mismatch() {
        let set = elevators(2, 2, &[(0, 0)]);
        let other = ElevatorSet::new(TorusGrid::new(3, 3).unwrap(), [c(0, 0)]).unwrap();
        let table = MappingTable::build(&other, &TraversalPolicy::MiddleOut).unwrap();
        assert_eq!(
            render(&set, &table),
            Err(MapError::GridMismatch {
                expected: (2, 2),
                found: (3, 3)
            })
        );
    }
}
