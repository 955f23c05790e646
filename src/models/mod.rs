mod db;
mod draft;
mod error;
mod note;
mod note_store;
pub mod query;
mod slot;

pub use db::{Database, SqliteSlot};
pub use draft::{MAX_TITLE_LEN, NoteDraft};
pub use error::{DraftError, SlotError, StoreError, StoreResult};
pub use note::{Note, NoteId};
pub use note_store::{NOTES_KEY, NoteStore};
pub use slot::{KeyValueSlot, MemorySlot};
