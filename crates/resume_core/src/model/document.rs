//! Resume document aggregate.
//!
//! # Responsibility
//! - Define `ResumeDocument` and its profile/entry parts.
//! - Define field selectors used by update operations.
//!
//! # Invariants
//! - Serialized form is the flat JSON object
//!   `{name,title,contact,summary,template,experience,education,skills}`.
//! - Bullets and skills keep empty strings verbatim.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of one experience or education entry.
///
/// Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl EntryId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Printable layout selected for the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// Single column.
    #[default]
    Simple,
    /// Sidebar + main region.
    Modern,
}

impl TemplateId {
    /// Wire name used in storage and by host callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Modern => "modern",
        }
    }
}

impl FromStr for TemplateId {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "modern" => Ok(Self::Modern),
            _ => Err(UnknownFieldError::new("template", value)),
        }
    }
}

/// Header/summary fields of a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub contact: String,
    pub summary: String,
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::Contact => &self.contact,
            ProfileField::Summary => &self.summary,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Title => self.title = value,
            ProfileField::Contact => self.contact = value,
            ProfileField::Summary => self.summary = value,
        }
    }
}

/// One work-experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub role: String,
    pub company: String,
    pub dates: String,
    /// Achievement statements, in display order. May be empty.
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    /// Creates an entry with empty fields and no bullets.
    pub fn empty(id: EntryId) -> Self {
        Self {
            id,
            role: String::new(),
            company: String::new(),
            dates: String::new(),
            bullets: Vec::new(),
        }
    }

    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Role => &self.role,
            ExperienceField::Company => &self.company,
            ExperienceField::Dates => &self.dates,
        }
    }

    pub fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Role => self.role = value,
            ExperienceField::Company => self.company = value,
            ExperienceField::Dates => self.dates = value,
        }
    }
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub dates: String,
}

impl EducationEntry {
    /// Creates an entry with empty fields.
    pub fn empty(id: EntryId) -> Self {
        Self {
            id,
            school: String::new(),
            degree: String::new(),
            dates: String::new(),
        }
    }

    pub fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::Dates => &self.dates,
        }
    }

    pub fn set(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::School => self.school = value,
            EducationField::Degree => self.degree = value,
            EducationField::Dates => self.dates = value,
        }
    }
}

/// Complete resume state owned by one editor session.
///
/// Profile fields are flattened so the wire form matches the storage layout
/// hosts already read (`name`, `title`, ... at the top level).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(flatten)]
    pub profile: Profile,
    pub template: TemplateId,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl ResumeDocument {
    pub fn find_experience(&self, id: EntryId) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.id == id)
    }

    pub fn find_education(&self, id: EntryId) -> Option<&EducationEntry> {
        self.education.iter().find(|entry| entry.id == id)
    }

    /// Largest id used by any entry in either list.
    pub fn max_entry_id(&self) -> Option<EntryId> {
        self.experience
            .iter()
            .map(|entry| entry.id)
            .chain(self.education.iter().map(|entry| entry.id))
            .max()
    }
}

/// Selector for `Profile` string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Title,
    Contact,
    Summary,
}

/// Selector for scalar `ExperienceEntry` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceField {
    Role,
    Company,
    Dates,
}

/// Selector for scalar `EducationEntry` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    School,
    Degree,
    Dates,
}

impl FromStr for ProfileField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "title" => Ok(Self::Title),
            "contact" => Ok(Self::Contact),
            "summary" => Ok(Self::Summary),
            _ => Err(UnknownFieldError::new("profile", value)),
        }
    }
}

impl FromStr for ExperienceField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "role" => Ok(Self::Role),
            "company" => Ok(Self::Company),
            "dates" => Ok(Self::Dates),
            _ => Err(UnknownFieldError::new("experience", value)),
        }
    }
}

impl FromStr for EducationField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "school" => Ok(Self::School),
            "degree" => Ok(Self::Degree),
            "dates" => Ok(Self::Dates),
            _ => Err(UnknownFieldError::new("education", value)),
        }
    }
}

/// Host passed a field or template name that no selector matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError {
    pub scope: &'static str,
    pub value: String,
}

impl UnknownFieldError {
    fn new(scope: &'static str, value: &str) -> Self {
        Self {
            scope,
            value: value.to_string(),
        }
    }
}

impl Display for UnknownFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} field `{}`", self.scope, self.value)
    }
}

impl Error for UnknownFieldError {}

#[cfg(test)]
mod tests {
    use super::{EntryId, ExperienceField, ProfileField, ResumeDocument, TemplateId};

    #[test]
    fn field_selectors_parse_wire_names() {
        assert_eq!("role".parse::<ExperienceField>(), Ok(ExperienceField::Role));
        assert_eq!("summary".parse::<ProfileField>(), Ok(ProfileField::Summary));
        assert_eq!(" Modern ".parse::<TemplateId>(), Ok(TemplateId::Modern));

        let err = "salary".parse::<ExperienceField>().unwrap_err();
        assert_eq!(err.to_string(), "unknown experience field `salary`");
    }

    #[test]
    fn default_document_is_blank_simple() {
        let document = ResumeDocument::default();
        assert_eq!(document.template, TemplateId::Simple);
        assert!(document.profile.name.is_empty());
        assert!(document.experience.is_empty());
        assert_eq!(document.max_entry_id(), None::<EntryId>);
    }
}
