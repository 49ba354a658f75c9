//! Document operations and the reducer that applies them.

use crate::model::document::{
    EducationEntry, EducationField, EntryId, ExperienceEntry, ExperienceField, ProfileField,
    ResumeDocument, TemplateId,
};

/// One named mutation of a `ResumeDocument`.
///
/// Operations that create entries carry the fully built entry, so id
/// allocation and variant-specific contents are decided before `apply` runs
/// and the reducer itself stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    SetProfileField {
        field: ProfileField,
        value: String,
    },
    SetTemplate(TemplateId),
    AddExperience {
        entry: ExperienceEntry,
    },
    RemoveExperience {
        id: EntryId,
    },
    UpdateExperienceField {
        id: EntryId,
        field: ExperienceField,
        value: String,
    },
    AddExperienceBullet {
        id: EntryId,
        text: String,
    },
    UpdateExperienceBullet {
        id: EntryId,
        index: usize,
        value: String,
    },
    RemoveExperienceBullet {
        id: EntryId,
        index: usize,
    },
    AddEducation {
        entry: EducationEntry,
    },
    RemoveEducation {
        id: EntryId,
    },
    UpdateEducationField {
        id: EntryId,
        field: EducationField,
        value: String,
    },
    AddSkill {
        text: String,
    },
    UpdateSkill {
        index: usize,
        value: String,
    },
    RemoveSkill {
        index: usize,
    },
    /// Replaces the whole document.
    Reset {
        defaults: ResumeDocument,
    },
}

impl Operation {
    /// Stable short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetProfileField { .. } => "set_profile_field",
            Self::SetTemplate(_) => "set_template",
            Self::AddExperience { .. } => "add_experience",
            Self::RemoveExperience { .. } => "remove_experience",
            Self::UpdateExperienceField { .. } => "update_experience_field",
            Self::AddExperienceBullet { .. } => "add_experience_bullet",
            Self::UpdateExperienceBullet { .. } => "update_experience_bullet",
            Self::RemoveExperienceBullet { .. } => "remove_experience_bullet",
            Self::AddEducation { .. } => "add_education",
            Self::RemoveEducation { .. } => "remove_education",
            Self::UpdateEducationField { .. } => "update_education_field",
            Self::AddSkill { .. } => "add_skill",
            Self::UpdateSkill { .. } => "update_skill",
            Self::RemoveSkill { .. } => "remove_skill",
            Self::Reset { .. } => "reset",
        }
    }
}

/// Applies `operation` to `document` and returns the resulting document.
pub fn apply(document: &ResumeDocument, operation: &Operation) -> ResumeDocument {
    let mut next = document.clone();
    match operation {
        Operation::SetProfileField { field, value } => {
            next.profile.set(*field, value.clone());
        }
        Operation::SetTemplate(template) => {
            next.template = *template;
        }
        Operation::AddExperience { entry } => {
            if next.find_experience(entry.id).is_none() {
                next.experience.push(entry.clone());
            }
        }
        Operation::RemoveExperience { id } => {
            next.experience.retain(|entry| entry.id != *id);
        }
        Operation::UpdateExperienceField { id, field, value } => {
            with_experience(&mut next, *id, |entry| entry.set(*field, value.clone()));
        }
        Operation::AddExperienceBullet { id, text } => {
            with_experience(&mut next, *id, |entry| entry.bullets.push(text.clone()));
        }
        Operation::UpdateExperienceBullet { id, index, value } => {
            with_experience(&mut next, *id, |entry| {
                replace_at(&mut entry.bullets, *index, value)
            });
        }
        Operation::RemoveExperienceBullet { id, index } => {
            with_experience(&mut next, *id, |entry| {
                remove_at(&mut entry.bullets, *index)
            });
        }
        Operation::AddEducation { entry } => {
            if next.find_education(entry.id).is_none() {
                next.education.push(entry.clone());
            }
        }
        Operation::RemoveEducation { id } => {
            next.education.retain(|entry| entry.id != *id);
        }
        Operation::UpdateEducationField { id, field, value } => {
            for entry in next.education.iter_mut().filter(|entry| entry.id == *id) {
                entry.set(*field, value.clone());
            }
        }
        Operation::AddSkill { text } => {
            next.skills.push(text.clone());
        }
        Operation::UpdateSkill { index, value } => {
            replace_at(&mut next.skills, *index, value);
        }
        Operation::RemoveSkill { index } => {
            remove_at(&mut next.skills, *index);
        }
        Operation::Reset { defaults } => {
            next = defaults.clone();
        }
    }
    next
}

fn with_experience(
    document: &mut ResumeDocument,
    id: EntryId,
    mut f: impl FnMut(&mut ExperienceEntry),
) {
    for entry in document.experience.iter_mut().filter(|entry| entry.id == id) {
        f(entry);
    }
}

fn replace_at(items: &mut [String], index: usize, value: &str) {
    if let Some(slot) = items.get_mut(index) {
        *slot = value.to_string();
    }
}

fn remove_at(items: &mut Vec<String>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}
