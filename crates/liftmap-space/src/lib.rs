//! Grid and elevator model for liftmap.
//!
//! This crate defines the wraparound coordinate space ([`TorusGrid`]), the
//! validated set of elevator cells ([`ElevatorSet`]), and the ring traversal
//! orders ([`TraversalPolicy`], [`RingOffsets`]) that the proximity search
//! walks.
//!
//! # Loading
//!
//! Elevator lists are read from `X,Y` text sources with
//! [`load_elevator_source`] or [`read_elevator_source`]. Every rejected
//! record is reported with its line number.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod elevators;
pub mod error;
pub mod grid;
pub mod ring;
pub mod source;

#[cfg(test)]
pub(crate) mod compliance;

pub use elevators::ElevatorSet;
pub use error::{SourceError, SpaceError};
pub use grid::TorusGrid;
pub use ring::{RingOffsets, TraversalPolicy};
pub use source::{load_elevator_source, parse_elevator_source, read_elevator_source};
