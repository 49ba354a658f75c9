//! Key/value storage contracts and their SQLite implementation.
//!
//! # Responsibility
//! - Expose browser-style local storage (`get_item`/`set_item`/`remove_item`)
//!   over string keys and string values.
//! - Keep SQL details out of the persistence bridge.
//!
//! # Invariants
//! - `set_item` fully overwrites any previous value for the key.
//! - Removing an absent key is not an error.

pub mod storage_repo;
