//! Reducer-style state container for the resume document.
//!
//! # Responsibility
//! - Name every document mutation as an `Operation` value.
//! - Apply operations as a pure `(document, operation) -> document` step.
//!
//! # Invariants
//! - `apply` never fails and never mutates its input.
//! - Id-keyed operations on an absent id are no-ops.
//! - Index-keyed operations on an out-of-range index are no-ops.

pub mod operation;

pub use operation::{apply, Operation};
