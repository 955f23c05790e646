pub mod logging;

use tracing::{info, warn};

use crate::models::{Database, query};

/// Logs what is stored in `db`, newest first, with content truncated.
pub fn dump_db_contents(db: &Database) {
    match db.raw_notes() {
        Ok(Some(raw)) => info!(bytes = raw.len(), key = db.notes.key(), "stored notes value"),
        Ok(None) => {
            info!("no notes stored yet");
            return;
        }
        Err(e) => {
            warn!(error = %e, "failed to read stored notes");
            return;
        }
    }

    let notes = query::list_view(db.notes.get_all(), "");
    info!(count = notes.len(), "dumping notes");
    for (i, note) in notes.iter().enumerate() {
        info!(
            index = i + 1,
            id = %note.id,
            title = %note.title,
            content = %note.content.chars().take(30).collect::<String>(),
            date = %note.date.to_rfc3339(),
            "note"
        );
    }
}
