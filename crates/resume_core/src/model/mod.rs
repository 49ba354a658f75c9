//! Resume document model.
//!
//! # Responsibility
//! - Define the canonical in-memory shape of one resume.
//! - Provide the blank and sample defaults a session starts from.
//! - Allocate stable entry ids.
//!
//! # Invariants
//! - Every experience/education entry is identified by an `EntryId` that is
//!   unique within its list for the whole session.
//! - A document is always total: absent input is an empty string or list.

pub mod defaults;
pub mod document;
pub mod id;
