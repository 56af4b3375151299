//! liftmap: assign every cell of a 2D torus to its nearest elevator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all liftmap sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use liftmap::prelude::*;
//!
//! // Two elevators on a 4x1 ring.
//! let grid = TorusGrid::new(4, 1).unwrap();
//! let elevators = parse_elevator_source("X,Y\n0,0\n2,0\n", grid).unwrap();
//!
//! let mut mapping = ElevatorMapping::new(elevators);
//! mapping.create_mapping(&TraversalPolicy::MiddleOut).unwrap();
//!
//! // (1,0) reaches (2,0) in one forward hop.
//! let table = mapping.mapping().unwrap();
//! assert_eq!(table.get(Cell::new(1, 0)), Some(Cell::new(2, 0)));
//! assert_eq!(mapping.visualize().unwrap(), "O\n AbBa\n");
//!
//! // The statements appended to a simulator configuration.
//! let mut buf = Vec::new();
//! let mut writer = AssignmentWriter::new(&mut buf);
//! writer.write_elevator_mapping(&mapping, DEFAULT_MAPPING_NAME).unwrap();
//! writer.write_elevator_coords(&mapping, DEFAULT_COORDS_NAME).unwrap();
//! drop(writer);
//! assert_eq!(
//!     String::from_utf8(buf).unwrap(),
//!     "\nelevatormapping={0,0,2,0,2,0,0,0}\nelevatorcoords={0,0,2,0}"
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `liftmap-core` | `Cell`, `ElevatorId` |
//! | [`space`] | `liftmap-space` | Torus grid, elevator sets, ring traversal, source reader |
//! | [`map`] | `liftmap-map` | Proximity search, mapping table, rendering |
//! | [`export`] | `liftmap-export` | Configuration statements: append and read back |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate and identifier types (`liftmap-core`).
pub use liftmap_core as types;

/// Grid model and elevator loading (`liftmap-space`).
///
/// Provides [`space::TorusGrid`], [`space::ElevatorSet`], and the ring
/// orders [`space::TraversalPolicy`] and [`space::RingOffsets`].
pub use liftmap_space as space;

/// Nearest-elevator search and mapping tables (`liftmap-map`).
///
/// [`map::MappingTable`] holds the result; [`map::ElevatorMapping`] pairs
/// it with its elevator set; [`map::render`] draws it.
pub use liftmap_map as map;

/// Simulator configuration export (`liftmap-export`).
///
/// Append with [`export::ConfigTarget`], read back with
/// [`export::read_elevator_mapping`] and [`export::read_elevator_coords`].
pub use liftmap_export as export;

/// Common imports for typical liftmap usage.
///
/// ```rust
/// use liftmap::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use liftmap_core::{Cell, ElevatorId};

    // Space
    pub use liftmap_space::{
        load_elevator_source, parse_elevator_source, ElevatorSet, RingOffsets, TorusGrid,
        TraversalPolicy,
    };

    // Mapping
    pub use liftmap_map::{render, ElevatorMapping, MappingTable, ProximitySearch};

    // Export
    pub use liftmap_export::{
        read_elevator_coords, read_elevator_mapping, AssignmentWriter, ConfigTarget, ExportNames,
        DEFAULT_COORDS_NAME, DEFAULT_MAPPING_NAME,
    };

    // Errors
    pub use liftmap_export::ExportError;
    pub use liftmap_map::MapError;
    pub use liftmap_space::{SourceError, SpaceError};
}
