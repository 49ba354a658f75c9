//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `resume_core` linkage with deterministic output.
//! - Print the plain-text preview of a stored resume when given a storage
//!   path: `resume_cli [DB_PATH] [blank|sample]`.

use resume_core::db::open_db;
use resume_core::{to_plain_text, DocumentVariant, ResumeEditor, SqliteLocalStorage};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("resume_core ping={}", resume_core::ping());
    println!("resume_core version={}", resume_core::core_version());

    let mut args = std::env::args().skip(1);
    let Some(db_path) = args.next() else {
        return ExitCode::SUCCESS;
    };
    let variant = match args.next().map(|raw| raw.parse::<DocumentVariant>()) {
        None => DocumentVariant::default(),
        Some(Ok(variant)) => variant,
        Some(Err(err)) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match preview(&db_path, variant) {
        Ok(text) => {
            println!();
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("preview failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn preview(db_path: &str, variant: DocumentVariant) -> Result<String, Box<dyn std::error::Error>> {
    let conn = open_db(db_path)?;
    let editor = ResumeEditor::open(SqliteLocalStorage::new(&conn), variant)?;
    Ok(to_plain_text(&editor.preview()))
}
