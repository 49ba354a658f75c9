//! Persistence bridge between the resume document and local storage.
//!
//! # Responsibility
//! - Load the stored document once at session start.
//! - Write the full document back after every change.
//! - Erase the stored entry on reset.
//!
//! # Invariants
//! - One fixed storage key is shared by load, save and clear.
//! - Malformed stored content never surfaces as an error; it is logged and
//!   treated as absent.
//! - Each stored field is decoded independently and merged over defaults.

pub mod bridge;
pub mod stored;

pub use bridge::{PersistError, PersistResult, PersistenceBridge, STORAGE_KEY};
pub use stored::{decode_document, StoredDocument};
