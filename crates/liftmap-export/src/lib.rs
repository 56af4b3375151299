//! Export of elevator layouts and mapping tables to simulator configuration.
//!
//! The simulator reads plain `name={v,v,...}` statements from its
//! configuration file. This crate appends two of them and can read them
//! back:
//!
//! - [`ConfigTarget`] appends to an existing file; [`AssignmentWriter`]
//!   writes the same statements to any `Write` sink
//! - [`read_elevator_mapping`] and [`read_elevator_coords`] recover a table
//!   and an elevator set from configuration text
//!
//! # Format
//!
//! ```text
//! elevatormapping={x0,y0,x1,y1,...}    one pair per cell, column-major
//! elevatorcoords={x0,y0,x1,y1,...}     one pair per elevator, input order
//! ```
//!
//! Every appended statement is preceded by a line break.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::Assignment;
pub use error::ExportError;
pub use reader::{
    find_assignment, load_config, parse_assignments, read_elevator_coords, read_elevator_mapping,
};
pub use writer::{
    AssignmentWriter, ConfigTarget, ExportNames, DEFAULT_COORDS_NAME, DEFAULT_MAPPING_NAME,
};
