//! Nearest-elevator mapping for liftmap.
//!
//! The pipeline is:
//!
//! 1. A [`ProximitySearch`] finds the nearest elevator of one cell. The
//!    ring-expansion search is implemented for
//!    [`TraversalPolicy`](liftmap_space::TraversalPolicy); its visitation
//!    order decides ties.
//! 2. [`MappingTable::build`] runs the search for every cell, all or nothing.
//! 3. [`render`] draws the table as text, one label per elevator.
//!
//! [`ElevatorMapping`] holds an elevator set together with its (possibly not
//! yet built) table and enforces that ordering.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod legend;
pub mod search;
pub mod session;
pub mod table;

pub use error::MapError;
pub use legend::{render, Legend};
pub use search::{nearest_elevator, ring_search, ProximitySearch, SearchHit};
pub use session::ElevatorMapping;
pub use table::MappingTable;
