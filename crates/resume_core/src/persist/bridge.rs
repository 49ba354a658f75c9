//! Load/save/clear of the single stored resume entry.

use super::stored::decode_document;
use crate::model::defaults::DocumentVariant;
use crate::model::document::ResumeDocument;
use crate::repo::storage_repo::{LocalStorage, StorageError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized document.
pub const STORAGE_KEY: &str = "resume_builder_data";

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence failure. Content problems are never reported here.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying storage read/write failed.
    Storage(StorageError),
    /// Document could not be serialized.
    Encode(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode resume document: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for PersistError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Bridge between one resume document and a `LocalStorage` backend.
pub struct PersistenceBridge<S: LocalStorage> {
    storage: S,
    variant: DocumentVariant,
}

impl<S: LocalStorage> PersistenceBridge<S> {
    /// Creates a bridge whose decoded documents fall back to `variant` defaults.
    pub fn new(storage: S, variant: DocumentVariant) -> Self {
        Self { storage, variant }
    }

    pub fn variant(&self) -> DocumentVariant {
        self.variant
    }

    /// Reads and decodes the stored document.
    ///
    /// Returns `Ok(None)` when nothing is stored or the stored text is not a
    /// JSON object. Keys that fail to decode keep their default values.
    ///
    /// # Errors
    /// - Returns `PersistError::Storage` only when the backend read fails.
    pub fn load(&self) -> PersistResult<Option<ResumeDocument>> {
        let Some(raw) = self.storage.get_item(STORAGE_KEY)? else {
            debug!("event=resume_load module=persist status=empty");
            return Ok(None);
        };

        match decode_document(&raw, self.variant.document()) {
            Some(document) => {
                info!(
                    "event=resume_load module=persist status=ok bytes={} experience={} education={} skills={}",
                    raw.len(),
                    document.experience.len(),
                    document.education.len(),
                    document.skills.len()
                );
                Ok(Some(document))
            }
            None => {
                warn!(
                    "event=resume_load module=persist status=fallback bytes={} reason=malformed",
                    raw.len()
                );
                Ok(None)
            }
        }
    }

    /// Serializes `document` and overwrites the stored entry.
    pub fn save(&self, document: &ResumeDocument) -> PersistResult<()> {
        let payload = serde_json::to_string(document)?;
        self.storage.set_item(STORAGE_KEY, &payload)?;
        debug!(
            "event=resume_save module=persist status=ok bytes={}",
            payload.len()
        );
        Ok(())
    }

    /// Removes the stored entry.
    pub fn clear(&self) -> PersistResult<()> {
        self.storage.remove_item(STORAGE_KEY)?;
        info!("event=resume_clear module=persist status=ok");
        Ok(())
    }
}
