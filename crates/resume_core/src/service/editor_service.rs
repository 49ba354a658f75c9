//! Resume editor session.
//!
//! # Responsibility
//! - Load-or-default the document on open and seed id allocation.
//! - Expose one method per user command.
//! - Persist after every change through `PersistenceBridge::save`.
//!
//! # Invariants
//! - Commands never fail on unknown ids or indexes; they are no-ops.
//! - A failed save is reported to the caller but the in-memory change stays.
//! - Reset only happens after the host confirms it.

use crate::model::defaults::DocumentVariant;
use crate::model::document::{
    EducationField, EntryId, ExperienceField, ProfileField, ResumeDocument, TemplateId,
};
use crate::model::id::IdAllocator;
use crate::persist::{PersistResult, PersistenceBridge};
use crate::render::{project, to_html, ResumeLayout};
use crate::repo::storage_repo::LocalStorage;
use crate::state::{apply, Operation};
use log::{debug, error, info};

/// Prompt shown before erasing stored data.
pub const RESET_CONFIRMATION: &str = "Reset all resume data? This will clear local storage.";
/// Acknowledgement shown by the Save command.
pub const SAVE_ACKNOWLEDGEMENT: &str = "Saved to local storage";

/// Host UI facilities the editor needs but does not own.
pub trait HostBridge {
    /// Asks the user to confirm a destructive action.
    fn confirm(&self, message: &str) -> bool;
    /// Shows a transient, non-blocking message.
    fn notify(&self, message: &str);
    /// Hands a printable document to the host print/PDF facility.
    fn print(&self, html: &str);
}

/// Result of `ResumeEditor::reset_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// User confirmed; document and storage were reset.
    Completed,
    /// User declined; nothing changed.
    Cancelled,
}

/// One editing session over one stored document.
pub struct ResumeEditor<S: LocalStorage> {
    document: ResumeDocument,
    bridge: PersistenceBridge<S>,
    ids: IdAllocator,
}

impl<S: LocalStorage> ResumeEditor<S> {
    /// Opens a session: stored document if present and readable, else the
    /// `variant` defaults.
    ///
    /// # Errors
    /// - Returns an error only when the storage backend read fails.
    pub fn open(storage: S, variant: DocumentVariant) -> PersistResult<Self> {
        let bridge = PersistenceBridge::new(storage, variant);
        let (document, source) = match bridge.load()? {
            Some(document) => (document, "storage"),
            None => (variant.document(), "defaults"),
        };
        info!(
            "event=editor_open module=service status=ok source={} variant={} template={}",
            source,
            variant.as_str(),
            document.template.as_str()
        );
        let ids = IdAllocator::for_document(&document);
        Ok(Self {
            document,
            bridge,
            ids,
        })
    }

    /// Current document.
    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn variant(&self) -> DocumentVariant {
        self.bridge.variant()
    }

    /// Applies `operation`, replaces the document and runs the save hook.
    pub fn dispatch(&mut self, operation: Operation) -> PersistResult<()> {
        self.document = apply(&self.document, &operation);
        debug!(
            "event=resume_apply module=service status=ok op={} experience={} education={} skills={}",
            operation.name(),
            self.document.experience.len(),
            self.document.education.len(),
            self.document.skills.len()
        );
        self.on_change(operation.name())
    }

    fn on_change(&self, op: &'static str) -> PersistResult<()> {
        self.bridge.save(&self.document).map_err(|err| {
            error!(
                "event=resume_save module=service status=error op={} error={}",
                op, err
            );
            err
        })
    }

    pub fn set_profile_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> PersistResult<()> {
        self.dispatch(Operation::SetProfileField {
            field,
            value: value.into(),
        })
    }

    pub fn set_template(&mut self, template: TemplateId) -> PersistResult<()> {
        self.dispatch(Operation::SetTemplate(template))
    }

    /// Appends a new experience entry and returns its id.
    pub fn add_experience(&mut self) -> PersistResult<EntryId> {
        let document = &self.document;
        let id = self
            .ids
            .next_id(|id| document.find_experience(id).is_some());
        let entry = self.variant().new_experience(id);
        self.dispatch(Operation::AddExperience { entry })?;
        Ok(id)
    }

    pub fn remove_experience(&mut self, id: EntryId) -> PersistResult<()> {
        self.dispatch(Operation::RemoveExperience { id })
    }

    pub fn update_experience_field(
        &mut self,
        id: EntryId,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> PersistResult<()> {
        self.dispatch(Operation::UpdateExperienceField {
            id,
            field,
            value: value.into(),
        })
    }

    pub fn add_experience_bullet(&mut self, id: EntryId) -> PersistResult<()> {
        let text = self.variant().new_bullet();
        self.dispatch(Operation::AddExperienceBullet { id, text })
    }

    pub fn update_experience_bullet(
        &mut self,
        id: EntryId,
        index: usize,
        value: impl Into<String>,
    ) -> PersistResult<()> {
        self.dispatch(Operation::UpdateExperienceBullet {
            id,
            index,
            value: value.into(),
        })
    }

    pub fn remove_experience_bullet(&mut self, id: EntryId, index: usize) -> PersistResult<()> {
        self.dispatch(Operation::RemoveExperienceBullet { id, index })
    }

    /// Appends a new education entry and returns its id.
    pub fn add_education(&mut self) -> PersistResult<EntryId> {
        let document = &self.document;
        let id = self
            .ids
            .next_id(|id| document.find_education(id).is_some());
        let entry = self.variant().new_education(id);
        self.dispatch(Operation::AddEducation { entry })?;
        Ok(id)
    }

    pub fn remove_education(&mut self, id: EntryId) -> PersistResult<()> {
        self.dispatch(Operation::RemoveEducation { id })
    }

    pub fn update_education_field(
        &mut self,
        id: EntryId,
        field: EducationField,
        value: impl Into<String>,
    ) -> PersistResult<()> {
        self.dispatch(Operation::UpdateEducationField {
            id,
            field,
            value: value.into(),
        })
    }

    pub fn add_skill(&mut self) -> PersistResult<()> {
        let text = self.variant().new_skill();
        self.dispatch(Operation::AddSkill { text })
    }

    pub fn update_skill(&mut self, index: usize, value: impl Into<String>) -> PersistResult<()> {
        self.dispatch(Operation::UpdateSkill {
            index,
            value: value.into(),
        })
    }

    pub fn remove_skill(&mut self, index: usize) -> PersistResult<()> {
        self.dispatch(Operation::RemoveSkill { index })
    }

    /// Resets the document to the session defaults after host confirmation.
    ///
    /// Storage is cleared and left empty; the next mutation writes it again.
    pub fn reset_all(&mut self, host: &dyn HostBridge) -> PersistResult<ResetOutcome> {
        if !host.confirm(RESET_CONFIRMATION) {
            info!("event=resume_reset module=service status=cancelled");
            return Ok(ResetOutcome::Cancelled);
        }

        self.bridge.clear()?;
        let defaults = self.variant().document();
        if let Some(max_id) = defaults.max_entry_id() {
            self.ids.observe(max_id);
        }
        self.document = apply(&self.document, &Operation::Reset { defaults });
        info!(
            "event=resume_reset module=service status=ok variant={}",
            self.variant().as_str()
        );
        Ok(ResetOutcome::Completed)
    }

    /// Save command. Persistence is already automatic, so this only
    /// acknowledges.
    pub fn acknowledge_save(&self, host: &dyn HostBridge) {
        host.notify(SAVE_ACKNOWLEDGEMENT);
    }

    /// Projects the current document for its selected template.
    pub fn preview(&self) -> ResumeLayout {
        project(&self.document)
    }

    /// Sends the printable preview to the host print facility.
    pub fn export(&self, host: &dyn HostBridge) {
        let html = to_html(&self.preview());
        info!(
            "event=resume_export module=service status=ok template={} bytes={}",
            self.document.template.as_str(),
            html.len()
        );
        host.print(&html);
    }
}
