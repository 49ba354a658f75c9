//! Structurally optional stored form of a resume document.
//!
//! # Responsibility
//! - Decode stored JSON key by key, skipping keys that do not decode.
//! - Merge whatever was decoded over a defaults document.
//!
//! # Invariants
//! - Decoding is total: any input yields either `None` (not a JSON object)
//!   or a `StoredDocument`.
//! - `null` values are treated as absent keys.
//! - Entry fields decode independently; only non-object entries are dropped.
//! - Merged entries always carry ids that are unique within their list.

use crate::model::document::{
    EducationEntry, EntryId, ExperienceEntry, Profile, ResumeDocument, TemplateId,
};
use crate::model::id::IdAllocator;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Stored experience entry; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredExperience {
    pub id: Option<i64>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub dates: Option<String>,
    pub bullets: Option<Vec<String>>,
}

/// Stored education entry; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredEducation {
    pub id: Option<i64>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub dates: Option<String>,
}

impl StoredExperience {
    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            id: field(object, "id"),
            role: field(object, "role"),
            company: field(object, "company"),
            dates: field(object, "dates"),
            bullets: string_list_field(object, "bullets"),
        }
    }
}

impl StoredEducation {
    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            id: field(object, "id"),
            school: field(object, "school"),
            degree: field(object, "degree"),
            dates: field(object, "dates"),
        }
    }
}

/// Stored document with every top-level key optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredDocument {
    pub name: Option<String>,
    pub title: Option<String>,
    pub contact: Option<String>,
    pub summary: Option<String>,
    pub template: Option<TemplateId>,
    pub experience: Option<Vec<StoredExperience>>,
    pub education: Option<Vec<StoredEducation>>,
    pub skills: Option<Vec<String>>,
}

impl StoredDocument {
    /// Parses raw stored text. Returns `None` when the text is not a JSON object.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=resume_decode module=persist status=fallback reason=invalid_json error={}",
                    err
                );
                return None;
            }
        };

        let Value::Object(object) = value else {
            warn!("event=resume_decode module=persist status=fallback reason=not_an_object");
            return None;
        };

        Some(Self {
            name: field(&object, "name"),
            title: field(&object, "title"),
            contact: field(&object, "contact"),
            summary: field(&object, "summary"),
            template: template_field(&object),
            experience: entry_list_field(&object, "experience", StoredExperience::from_object),
            education: entry_list_field(&object, "education", StoredEducation::from_object),
            skills: string_list_field(&object, "skills"),
        })
    }

    /// Merges decoded fields over `defaults`.
    pub fn merge_over(self, defaults: ResumeDocument) -> ResumeDocument {
        let mut document = defaults;
        let profile: &mut Profile = &mut document.profile;
        merge_string(&mut profile.name, self.name);
        merge_string(&mut profile.title, self.title);
        merge_string(&mut profile.contact, self.contact);
        merge_string(&mut profile.summary, self.summary);

        if let Some(template) = self.template {
            document.template = template;
        }
        if let Some(experience) = self.experience {
            document.experience = merge_experience(experience);
        }
        if let Some(education) = self.education {
            document.education = merge_education(education);
        }
        if let Some(skills) = self.skills {
            document.skills = skills;
        }
        document
    }
}

/// Decodes raw stored text over `defaults`.
///
/// Returns `None` when the text is not a JSON object at all.
pub fn decode_document(raw: &str, defaults: ResumeDocument) -> Option<ResumeDocument> {
    StoredDocument::parse(raw).map(|stored| stored.merge_over(defaults))
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    let value = object.get(key).filter(|value| !value.is_null())?;
    match <T as Deserialize>::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!(
                "event=resume_decode module=persist status=skip_field field={} error={}",
                key, err
            );
            None
        }
    }
}

fn template_field(object: &Map<String, Value>) -> Option<TemplateId> {
    let raw: String = field(object, "template")?;
    match raw.parse::<TemplateId>() {
        Ok(template) => Some(template),
        Err(err) => {
            warn!(
                "event=resume_decode module=persist status=skip_field field=template error={}",
                err
            );
            None
        }
    }
}

/// Decodes an array element by element; `decode` returns `None` to drop one.
fn list_field<T>(
    object: &Map<String, Value>,
    key: &str,
    decode: impl Fn(&Value) -> Option<T>,
) -> Option<Vec<T>> {
    let items: Vec<Value> = field(object, key)?;
    let total = items.len();
    let decoded = items.iter().filter_map(decode).collect::<Vec<_>>();
    if decoded.len() != total {
        warn!(
            "event=resume_decode module=persist status=skip_items field={} dropped={}",
            key,
            total - decoded.len()
        );
    }
    Some(decoded)
}

fn string_list_field(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    list_field(object, key, |item| item.as_str().map(str::to_string))
}

fn entry_list_field<T>(
    object: &Map<String, Value>,
    key: &str,
    from_object: fn(&Map<String, Value>) -> T,
) -> Option<Vec<T>> {
    list_field(object, key, |item| item.as_object().map(from_object))
}

fn merge_string(target: &mut String, stored: Option<String>) {
    if let Some(value) = stored {
        *target = value;
    }
}

/// Keeps stored ids that are present and unique; allocates the rest.
fn resolve_ids(stored: &[Option<i64>]) -> Vec<EntryId> {
    let floor = stored.iter().flatten().copied().max().map(EntryId);
    let mut allocator = IdAllocator::new(floor);
    let mut taken = stored.iter().flatten().copied().collect::<HashSet<_>>();
    let mut seen = HashSet::new();
    stored
        .iter()
        .map(|id| match id {
            Some(value) if seen.insert(*value) => EntryId(*value),
            _ => {
                let id = allocator.next_id(|candidate| taken.contains(&candidate.get()));
                taken.insert(id.get());
                id
            }
        })
        .collect()
}

fn merge_experience(stored: Vec<StoredExperience>) -> Vec<ExperienceEntry> {
    let ids = resolve_ids(&stored.iter().map(|entry| entry.id).collect::<Vec<_>>());
    stored
        .into_iter()
        .zip(ids)
        .map(|(entry, id)| ExperienceEntry {
            id,
            role: entry.role.unwrap_or_default(),
            company: entry.company.unwrap_or_default(),
            dates: entry.dates.unwrap_or_default(),
            bullets: entry.bullets.unwrap_or_default(),
        })
        .collect()
}

fn merge_education(stored: Vec<StoredEducation>) -> Vec<EducationEntry> {
    let ids = resolve_ids(&stored.iter().map(|entry| entry.id).collect::<Vec<_>>());
    stored
        .into_iter()
        .zip(ids)
        .map(|(entry, id)| EducationEntry {
            id,
            school: entry.school.unwrap_or_default(),
            degree: entry.degree.unwrap_or_default(),
            dates: entry.dates.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_document, StoredDocument};
    use crate::model::defaults::DocumentVariant;
    use crate::model::document::{EntryId, ResumeDocument, TemplateId};
    use std::collections::HashSet;

    #[test]
    fn non_object_json_is_treated_as_absent() {
        assert_eq!(StoredDocument::parse("[1, 2]"), None);
        assert_eq!(StoredDocument::parse("\"text\""), None);
        assert_eq!(StoredDocument::parse("{ nope"), None);
    }

    #[test]
    fn wrong_typed_keys_are_skipped_independently() {
        let raw = r#"{"name": 42, "title": "Engineer", "skills": "rust", "template": "modern"}"#;
        let document = decode_document(raw, DocumentVariant::Sample.document()).unwrap();

        assert_eq!(document.profile.name, "Jane Doe");
        assert_eq!(document.profile.title, "Engineer");
        assert_eq!(document.skills, DocumentVariant::Sample.document().skills);
        assert_eq!(document.template, TemplateId::Modern);
    }

    #[test]
    fn null_and_unknown_template_keep_defaults() {
        let raw = r#"{"summary": null, "template": "fancy", "extra": true}"#;
        let document = decode_document(raw, ResumeDocument::default()).unwrap();
        assert_eq!(document, ResumeDocument::default());
    }

    #[test]
    fn entries_missing_fields_are_filled_with_empty_values() {
        let raw = r#"{"experience": [{"id": 3, "role": "Dev"}, "garbage"]}"#;
        let document = decode_document(raw, ResumeDocument::default()).unwrap();

        assert_eq!(document.experience.len(), 1);
        let entry = &document.experience[0];
        assert_eq!(entry.id, EntryId(3));
        assert_eq!(entry.role, "Dev");
        assert!(entry.company.is_empty());
        assert!(entry.bullets.is_empty());
    }

    #[test]
    fn missing_and_duplicate_ids_are_reallocated() {
        let raw = r#"{"education": [{"id": 5}, {"id": 5}, {"school": "X"}]}"#;
        let document = decode_document(raw, ResumeDocument::default()).unwrap();

        let ids = document
            .education
            .iter()
            .map(|entry| entry.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 3);
        assert_eq!(document.education[0].id, EntryId(5));
        assert!(document.education[1].id > EntryId(5));
        assert_eq!(document.education[2].school, "X");
    }

    #[test]
    fn wrong_typed_entry_fields_keep_the_rest_of_the_entry() {
        let raw = r#"{"experience": [
            {"id": 1, "role": "Kept", "bullets": ["a"]},
            {"id": 2, "role": "Lead", "company": 5, "bullets": ["shipped", null, 3]},
            {"id": "3", "role": "Staff", "dates": "2020"},
            null
        ]}"#;
        let document = decode_document(raw, ResumeDocument::default()).unwrap();

        let roles = document
            .experience
            .iter()
            .map(|entry| entry.role.as_str())
            .collect::<Vec<_>>();
        assert_eq!(roles, vec!["Kept", "Lead", "Staff"]);

        let lead = &document.experience[1];
        assert_eq!(lead.id, EntryId(2));
        assert!(lead.company.is_empty());
        assert_eq!(lead.bullets, vec!["shipped".to_string()]);

        let staff = &document.experience[2];
        assert!(staff.id > EntryId(2));
        assert_eq!(staff.dates, "2020");
    }

    #[test]
    fn wrong_typed_skill_elements_are_dropped_individually() {
        let raw = r#"{"skills": ["Rust", 7, null, "SQL"]}"#;
        let document = decode_document(raw, ResumeDocument::default()).unwrap();
        assert_eq!(document.skills, vec!["Rust".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn duplicate_ids_at_the_ceiling_stay_unique() {
        let raw = r#"{"education": [
            {"id": 9223372036854775807, "school": "A"},
            {"id": 9223372036854775807, "school": "B"}
        ]}"#;
        let document = decode_document(raw, ResumeDocument::default()).unwrap();

        let ids = document
            .education
            .iter()
            .map(|entry| entry.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 2);
        assert_eq!(document.education[0].id, EntryId(i64::MAX));
        assert_eq!(document.education[1].id, EntryId(1));
        assert_eq!(document.education[1].school, "B");
    }
}
