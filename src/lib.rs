pub mod config;
pub mod models;
pub mod util;

pub use config::Config;
pub use models::{
    Database, DraftError, KeyValueSlot, MemorySlot, Note, NoteDraft, NoteId, NoteStore,
    SlotError, SqliteSlot, StoreError, StoreResult,
};
