use thiserror::Error;

use crate::models::NoteId;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("sqlite failure: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage connection mutex poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The value under `key` is not a valid note collection.
    #[error("stored notes under {key} are corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to persist notes: {0}")]
    Persistence(#[from] SlotError),

    #[error("note {0} is not stored")]
    NotFound(NoteId),

    #[error("failed to encode notes: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("title is {len} characters long, at most {max} allowed")]
    TitleTooLong { len: usize, max: usize },
}
