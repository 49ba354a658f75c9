use resume_core::db::open_db_in_memory;
use resume_core::{
    DocumentVariant, EntryId, ExperienceField, HostBridge, LocalStorage, PersistenceBridge,
    ProfileField, ResetOutcome, ResumeDocument, ResumeEditor, SqliteLocalStorage, TemplateId,
    STORAGE_KEY,
};
use std::cell::RefCell;

#[derive(Default)]
struct ConfirmingHost {
    prompts: RefCell<Vec<String>>,
}

impl HostBridge for ConfirmingHost {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        true
    }

    fn notify(&self, _message: &str) {}

    fn print(&self, _html: &str) {}
}

#[test]
fn load_after_save_roundtrips_reachable_documents() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::new(&conn);
    let mut editor = ResumeEditor::open(&storage, DocumentVariant::Blank).unwrap();

    editor.set_profile_field(ProfileField::Name, "Ada").unwrap();
    editor.set_template(TemplateId::Modern).unwrap();
    let first = editor.add_experience().unwrap();
    editor
        .update_experience_field(first, ExperienceField::Company, "Analytical Engines")
        .unwrap();
    editor.add_experience_bullet(first).unwrap();
    let emptied = editor.add_experience().unwrap();
    editor.remove_experience_bullet(emptied, 0).unwrap();
    editor.add_education().unwrap();
    editor.add_skill().unwrap();
    editor.update_skill(0, "").unwrap();

    let expected = editor.document().clone();
    assert_eq!(expected.experience[0].bullets, vec![String::new(), String::new()]);
    assert!(expected.experience[1].bullets.is_empty());

    let bridge = PersistenceBridge::new(&storage, DocumentVariant::Blank);
    assert_eq!(bridge.load().unwrap(), Some(expected.clone()));

    let reopened = ResumeEditor::open(&storage, DocumentVariant::Blank).unwrap();
    assert_eq!(reopened.document(), &expected);
}

#[test]
fn load_with_missing_skills_key_keeps_default_skills() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::new(&conn);
    storage
        .set_item(
            STORAGE_KEY,
            r#"{
                "name": "Grace",
                "title": "Rear Admiral",
                "contact": "grace@navy.mil",
                "summary": "Compilers.",
                "template": "modern",
                "experience": [
                    {"id": 7, "role": "Programmer", "company": "Harvard", "dates": "1944", "bullets": ["Mark I"]}
                ],
                "education": [
                    {"id": 8, "school": "Yale", "degree": "PhD", "dates": "1934"}
                ]
            }"#,
        )
        .unwrap();

    let loaded = PersistenceBridge::new(&storage, DocumentVariant::Blank)
        .load()
        .unwrap()
        .expect("stored object should decode");

    assert!(loaded.skills.is_empty());
    assert_eq!(loaded.profile.name, "Grace");
    assert_eq!(loaded.profile.title, "Rear Admiral");
    assert_eq!(loaded.profile.contact, "grace@navy.mil");
    assert_eq!(loaded.profile.summary, "Compilers.");
    assert_eq!(loaded.template, TemplateId::Modern);
    assert_eq!(loaded.experience[0].id, EntryId(7));
    assert_eq!(loaded.experience[0].bullets, vec!["Mark I".to_string()]);
    assert_eq!(loaded.education[0].school, "Yale");
}

#[test]
fn missing_keys_fall_back_to_sample_defaults() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::new(&conn);
    storage
        .set_item(STORAGE_KEY, r#"{"name": "Someone Else"}"#)
        .unwrap();

    let editor = ResumeEditor::open(&storage, DocumentVariant::Sample).unwrap();
    let sample = DocumentVariant::Sample.document();

    assert_eq!(editor.document().profile.name, "Someone Else");
    assert_eq!(editor.document().profile.title, sample.profile.title);
    assert_eq!(editor.document().experience, sample.experience);
    assert_eq!(editor.document().skills, sample.skills);
}

#[test]
fn malformed_storage_yields_default_document() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::new(&conn);
    storage.set_item(STORAGE_KEY, "{not json at all").unwrap();

    let bridge = PersistenceBridge::new(&storage, DocumentVariant::Blank);
    assert_eq!(bridge.load().unwrap(), None);

    let editor = ResumeEditor::open(&storage, DocumentVariant::Blank).unwrap();
    assert_eq!(editor.document(), &ResumeDocument::default());
}

#[test]
fn every_mutation_is_written_through() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::new(&conn);
    let mut editor = ResumeEditor::open(&storage, DocumentVariant::Blank).unwrap();
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap(), None);

    editor.set_profile_field(ProfileField::Title, "Engineer").unwrap();
    let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["title"], "Engineer");

    editor.add_skill().unwrap();
    let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["skills"], serde_json::json!([""]));
}

#[test]
fn reset_restores_defaults_and_clears_storage() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::new(&conn);
    let host = ConfirmingHost::default();
    let mut editor = ResumeEditor::open(&storage, DocumentVariant::Blank).unwrap();

    editor.set_profile_field(ProfileField::Name, "Temp").unwrap();
    editor.add_education().unwrap();

    let outcome = editor.reset_all(&host).unwrap();
    assert_eq!(outcome, ResetOutcome::Completed);
    assert_eq!(editor.document(), &ResumeDocument::default());
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap(), None);
    assert_eq!(host.prompts.borrow().len(), 1);

    let bridge = PersistenceBridge::new(&storage, DocumentVariant::Blank);
    assert_eq!(bridge.load().unwrap(), None);
    let reopened = ResumeEditor::open(&storage, DocumentVariant::Blank).unwrap();
    assert_eq!(reopened.document(), &ResumeDocument::default());
}

#[test]
fn sample_reset_keeps_new_ids_unique() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::new(&conn);
    let host = ConfirmingHost::default();
    let mut editor = ResumeEditor::open(&storage, DocumentVariant::Sample).unwrap();

    editor.reset_all(&host).unwrap();
    let id = editor.add_experience().unwrap();

    let ids = editor
        .document()
        .experience
        .iter()
        .map(|entry| entry.id)
        .collect::<Vec<_>>();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.iter().filter(|existing| **existing == id).count(), 1);
}
