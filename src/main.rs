use anyhow::Context;
use std::fs;
use tracing::{info, warn};

use tap_notes::Config;
use tap_notes::models::{Database, query};
use tap_notes::util::{dump_db_contents, logging::init_logging};

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    init_logging(&config.log_filter);

    let db_path = config.db_path();
    info!(path = ?db_path, "using database");

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(&db_path) {
            info!(bytes = metadata.len(), "database file exists");
        }
    } else {
        info!("database file does not exist yet, creating it");
    }

    config
        .ensure_data_dir()
        .with_context(|| format!("creating data directory {:?}", config.data_dir))?;

    let db = match Database::with_key(&db_path, &config.storage_key) {
        Ok(db) => db,
        Err(e) => {
            warn!(error = %e, "failed to open database, falling back to in-memory storage");
            Database::with_key(":memory:", &config.storage_key)
                .context("opening in-memory database")?
        }
    };

    dump_db_contents(&db);

    let notes = query::list_view(db.notes.load().context("loading notes")?, "");
    if notes.is_empty() {
        println!("No notes yet!");
    }
    for note in &notes {
        println!("{}", note.title);
        println!("  {}", query::format_date_time(&note.date));
        for line in note.content.lines().take(3) {
            println!("  {line}");
        }
        println!();
    }

    Ok(())
}
