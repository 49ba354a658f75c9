//! Editor session service.
//!
//! # Responsibility
//! - Own the current document for one editing session.
//! - Route every user command through the reducer, then the save hook.
//! - Keep host UI concerns (confirm/notify/print) behind `HostBridge`.
//!
//! # Invariants
//! - The document is replaced only by `apply` results.
//! - Every mutation except reset is followed by a synchronous save.

pub mod editor_service;
