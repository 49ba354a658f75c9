//! FFI use-case API for the Flutter editor shell.
//!
//! # Responsibility
//! - Expose one sync call per editor command to Dart via FRB.
//! - Run every call as a complete load -> mutate -> save cycle.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Field and template names are validated here, before reaching core.
//! - Return values are envelopes with stable meaning; errors are messages.

use log::warn;
use resume_core::db::open_db;
use resume_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    to_html, to_plain_text, DocumentVariant, EducationField, EntryId, ExperienceField,
    HostBridge, PersistResult, ProfileField, ResetOutcome, ResumeEditor, SqliteLocalStorage,
    TemplateId,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "resume_builder.sqlite3";
const DB_PATH_ENV: &str = "RESUME_BUILDER_DB_PATH";
const VARIANT_ENV: &str = "RESUME_BUILDER_VARIANT";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static VARIANT: OnceLock<DocumentVariant> = OnceLock::new();

/// Health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling logs.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for editor commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeActionResponse {
    /// Whether the command was applied and persisted.
    pub ok: bool,
    /// Id of the entry created by an `add_*` command.
    pub entry_id: Option<i64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ResumeActionResponse {
    fn success(message: impl Into<String>, entry_id: Option<EntryId>) -> Self {
        Self {
            ok: true,
            entry_id: entry_id.map(EntryId::get),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// Result envelope for read-only queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeTextResponse {
    pub ok: bool,
    /// JSON document, HTML or plain text depending on the call.
    pub text: String,
    pub message: String,
}

/// Returns the current document as its stored JSON object.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_get() -> ResumeTextResponse {
    get_at(&db_path())
}

fn get_at(path: &Path) -> ResumeTextResponse {
    read_text(path, "resume_get", |editor| serde_json_string(editor.document()))
}

/// Returns the printable HTML preview; hosts pass it to their print facility.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_preview_html() -> ResumeTextResponse {
    preview_html_at(&db_path())
}

fn preview_html_at(path: &Path) -> ResumeTextResponse {
    read_text(path, "resume_preview_html", |editor| {
        Ok(to_html(&editor.preview()))
    })
}

/// Returns the plain-text preview.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_preview_text() -> ResumeTextResponse {
    read_text(&db_path(), "resume_preview_text", |editor| {
        Ok(to_plain_text(&editor.preview()))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_set_profile_field(field: String, value: String) -> ResumeActionResponse {
    set_profile_field_at(&db_path(), &field, value)
}

fn set_profile_field_at(path: &Path, field: &str, value: String) -> ResumeActionResponse {
    run_command(path, "resume_set_profile_field", |editor| {
        let field = field.parse::<ProfileField>().map_err(|err| err.to_string())?;
        applied(editor.set_profile_field(field, value))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_set_template(template: String) -> ResumeActionResponse {
    run_command(&db_path(), "resume_set_template", |editor| {
        let template = template.parse::<TemplateId>().map_err(|err| err.to_string())?;
        applied(editor.set_template(template))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_add_experience() -> ResumeActionResponse {
    add_experience_at(&db_path())
}

fn add_experience_at(path: &Path) -> ResumeActionResponse {
    run_command(path, "resume_add_experience", |editor| {
        created(editor.add_experience())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_remove_experience(id: i64) -> ResumeActionResponse {
    run_command(&db_path(), "resume_remove_experience", |editor| {
        applied(editor.remove_experience(EntryId(id)))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_update_experience_field(
    id: i64,
    field: String,
    value: String,
) -> ResumeActionResponse {
    update_experience_field_at(&db_path(), id, &field, value)
}

fn update_experience_field_at(
    path: &Path,
    id: i64,
    field: &str,
    value: String,
) -> ResumeActionResponse {
    run_command(path, "resume_update_experience_field", |editor| {
        let field = field.parse::<ExperienceField>().map_err(|err| err.to_string())?;
        applied(editor.update_experience_field(EntryId(id), field, value))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_add_experience_bullet(id: i64) -> ResumeActionResponse {
    run_command(&db_path(), "resume_add_experience_bullet", |editor| {
        applied(editor.add_experience_bullet(EntryId(id)))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_update_experience_bullet(
    id: i64,
    index: u32,
    value: String,
) -> ResumeActionResponse {
    run_command(&db_path(), "resume_update_experience_bullet", |editor| {
        applied(editor.update_experience_bullet(EntryId(id), index as usize, value))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_remove_experience_bullet(id: i64, index: u32) -> ResumeActionResponse {
    run_command(&db_path(), "resume_remove_experience_bullet", |editor| {
        applied(editor.remove_experience_bullet(EntryId(id), index as usize))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_add_education() -> ResumeActionResponse {
    run_command(&db_path(), "resume_add_education", |editor| {
        created(editor.add_education())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_remove_education(id: i64) -> ResumeActionResponse {
    run_command(&db_path(), "resume_remove_education", |editor| {
        applied(editor.remove_education(EntryId(id)))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_update_education_field(
    id: i64,
    field: String,
    value: String,
) -> ResumeActionResponse {
    run_command(&db_path(), "resume_update_education_field", |editor| {
        let field = field.parse::<EducationField>().map_err(|err| err.to_string())?;
        applied(editor.update_education_field(EntryId(id), field, value))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_add_skill() -> ResumeActionResponse {
    run_command(&db_path(), "resume_add_skill", |editor| applied(editor.add_skill()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_update_skill(index: u32, value: String) -> ResumeActionResponse {
    run_command(&db_path(), "resume_update_skill", |editor| {
        applied(editor.update_skill(index as usize, value))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn resume_remove_skill(index: u32) -> ResumeActionResponse {
    run_command(&db_path(), "resume_remove_skill", |editor| {
        applied(editor.remove_skill(index as usize))
    })
}

/// Save command. Storage is already written on every change, so this only
/// returns the acknowledgement text for the host to display.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_acknowledge_save() -> ResumeActionResponse {
    let host = AnsweringHost::new(false);
    match with_editor(&db_path(), |editor| {
        editor.acknowledge_save(&host);
        Ok(())
    }) {
        Ok(()) => ResumeActionResponse::success(host.last_notice(), None),
        Err(err) => ResumeActionResponse::failure(format!("resume_acknowledge_save failed: {err}")),
    }
}

/// Resets the document and clears storage.
///
/// # FFI contract
/// - The host shows its own confirmation dialog and passes the answer as
///   `confirmed`; `false` leaves everything untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_reset(confirmed: bool) -> ResumeActionResponse {
    reset_at(&db_path(), confirmed)
}

fn reset_at(path: &Path, confirmed: bool) -> ResumeActionResponse {
    let host = AnsweringHost::new(confirmed);
    match with_editor(path, |editor| {
        editor.reset_all(&host).map_err(|err| err.to_string())
    }) {
        Ok(ResetOutcome::Completed) => ResumeActionResponse::success("Resume reset.", None),
        Ok(ResetOutcome::Cancelled) => ResumeActionResponse::failure("Reset cancelled."),
        Err(err) => ResumeActionResponse::failure(format!("resume_reset failed: {err}")),
    }
}

/// Host answering confirmations with a pre-collected user decision.
struct AnsweringHost {
    confirmed: bool,
    notices: RefCell<Vec<String>>,
}

impl AnsweringHost {
    fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            notices: RefCell::new(Vec::new()),
        }
    }

    fn last_notice(&self) -> String {
        self.notices.borrow().last().cloned().unwrap_or_default()
    }
}

impl HostBridge for AnsweringHost {
    fn confirm(&self, _message: &str) -> bool {
        self.confirmed
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn print(&self, _html: &str) {}
}

fn applied(result: PersistResult<()>) -> Result<Option<EntryId>, String> {
    result.map(|()| None).map_err(|err| err.to_string())
}

fn created(result: PersistResult<EntryId>) -> Result<Option<EntryId>, String> {
    result.map(Some).map_err(|err| err.to_string())
}

fn serde_json_string(document: &resume_core::ResumeDocument) -> Result<String, String> {
    serde_json::to_string(document).map_err(|err| format!("encode failed: {err}"))
}

fn run_command(
    path: &Path,
    name: &str,
    command: impl FnOnce(
        &mut ResumeEditor<SqliteLocalStorage<'_>>,
    ) -> Result<Option<EntryId>, String>,
) -> ResumeActionResponse {
    match with_editor(path, command) {
        Ok(entry_id) => ResumeActionResponse::success("Saved.", entry_id),
        Err(err) => {
            warn!("event=ffi_command module=ffi status=error command={name}");
            ResumeActionResponse::failure(format!("{name} failed: {err}"))
        }
    }
}

fn read_text(
    path: &Path,
    name: &str,
    query: impl FnOnce(&mut ResumeEditor<SqliteLocalStorage<'_>>) -> Result<String, String>,
) -> ResumeTextResponse {
    match with_editor(path, query) {
        Ok(text) => ResumeTextResponse {
            ok: true,
            text,
            message: String::new(),
        },
        Err(err) => ResumeTextResponse {
            ok: false,
            text: String::new(),
            message: format!("{name} failed: {err}"),
        },
    }
}

fn with_editor<T>(
    path: &Path,
    f: impl FnOnce(&mut ResumeEditor<SqliteLocalStorage<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let conn = open_db(path).map_err(|err| format!("storage open failed: {err}"))?;
    let storage = SqliteLocalStorage::new(&conn);
    let mut editor = ResumeEditor::open(storage, variant())
        .map_err(|err| format!("editor open failed: {err}"))?;
    f(&mut editor)
}

fn db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn variant() -> DocumentVariant {
    *VARIANT.get_or_init(|| {
        std::env::var(VARIANT_ENV)
            .ok()
            .and_then(|raw| raw.parse::<DocumentVariant>().ok())
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::{
        add_experience_at, core_version, get_at, init_logging, ping, preview_html_at, reset_at,
        run_command, set_profile_field_at, update_experience_field_at,
    };
    use resume_core::{LocalStorage, SqliteLocalStorage, STORAGE_KEY};
    use std::path::Path;

    fn stored_row(path: &Path) -> Option<String> {
        let conn = resume_core::db::open_db(path).unwrap();
        let stored = SqliteLocalStorage::new(&conn).get_item(STORAGE_KEY).unwrap();
        stored
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn command_flow_roundtrips_through_one_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.sqlite3");

        assert!(reset_at(&path, true).ok);

        let created = add_experience_at(&path);
        assert!(created.ok, "{}", created.message);
        let id = created.entry_id.expect("add should return entry id");

        let updated = update_experience_field_at(&path, id, "role", "Lead".to_string());
        assert!(updated.ok, "{}", updated.message);
        assert!(set_profile_field_at(&path, "name", "Ada".to_string()).ok);

        let document = get_at(&path);
        assert!(document.ok, "{}", document.message);
        let value: serde_json::Value = serde_json::from_str(&document.text).unwrap();
        assert_eq!(value["name"], "Ada");
        let entry = value["experience"]
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["id"] == id)
            .expect("created entry should be stored");
        assert_eq!(entry["role"], "Lead");

        let html = preview_html_at(&path);
        assert!(html.ok, "{}", html.message);
        assert!(html.text.contains("Lead"));
    }

    #[test]
    fn unknown_field_name_is_rejected_without_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.sqlite3");

        let response = update_experience_field_at(&path, 1, "salary", "1M".to_string());

        assert!(!response.ok);
        assert!(response.message.contains("unknown experience field `salary`"));
        assert_eq!(stored_row(&path), None);

        let response = set_profile_field_at(&path, "age", "40".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("unknown profile field"));
        assert_eq!(stored_row(&path), None);
    }

    #[test]
    fn declined_reset_reports_cancellation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.sqlite3");

        let response = reset_at(&path, false);
        assert!(!response.ok);
        assert_eq!(response.message, "Reset cancelled.");
    }

    #[test]
    fn raw_storage_row_is_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.sqlite3");

        let response = run_command(&path, "resume_add_skill", |editor| {
            editor.add_skill().map(|()| None).map_err(|err| err.to_string())
        });
        assert!(response.ok, "{}", response.message);

        let conn = rusqlite::Connection::open(&path).unwrap();
        let raw: String = conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_object());
        assert!(value["skills"].as_array().unwrap().last().is_some());
    }
}
