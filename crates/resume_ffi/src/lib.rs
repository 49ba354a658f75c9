//! Flutter-facing bindings for the resume builder core.

pub mod api;
