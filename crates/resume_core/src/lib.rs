//! Core domain logic for the resume builder.
//! This crate is the single source of truth for document invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod render;
pub mod repo;
pub mod service;
pub mod state;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::defaults::DocumentVariant;
pub use model::document::{
    EducationEntry, EducationField, EntryId, ExperienceEntry, ExperienceField, Profile,
    ProfileField, ResumeDocument, TemplateId, UnknownFieldError,
};
pub use model::id::IdAllocator;
pub use persist::{decode_document, PersistError, PersistResult, PersistenceBridge, STORAGE_KEY};
pub use render::{project, to_html, to_plain_text, ResumeLayout};
pub use repo::storage_repo::{LocalStorage, SqliteLocalStorage, StorageError, StorageResult};
pub use service::editor_service::{
    HostBridge, ResetOutcome, ResumeEditor, RESET_CONFIRMATION, SAVE_ACKNOWLEDGEMENT,
};
pub use state::{apply, Operation};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
