//! Core types for the liftmap workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate type shared by the grid model, the proximity search, and the
//! configuration codec.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;

pub use id::{Cell, ElevatorId};
