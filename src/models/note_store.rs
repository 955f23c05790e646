use tracing::{debug, error, info, warn};

use crate::models::{KeyValueSlot, Note, NoteDraft, NoteId, StoreError, StoreResult};

/// Slot key the whole note collection lives under.
pub const NOTES_KEY: &str = "@NotesApp:notes";

/// Reads and writes the full note collection through a single slot.
///
/// Every mutation loads the whole collection, transforms it in memory and
/// writes it back. Nothing here serializes concurrent callers: two mutations
/// racing against the same slot can lose one another's changes.
pub struct NoteStore<S> {
    slot: S,
    key: String,
}

impl<S: KeyValueSlot> NoteStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, NOTES_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Strict read. A missing value is an empty collection, an unreadable one
    /// is [`StoreError::Corrupt`].
    pub fn load(&self) -> StoreResult<Vec<Note>> {
        let Some(raw) = self.slot.get(&self.key)? else {
            debug!(key = %self.key, "no stored notes yet");
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: self.key.clone(),
            source,
        })
    }

    /// Fail-open read: any error is logged and yields an empty collection.
    pub fn get_all(&self) -> Vec<Note> {
        match self.load() {
            Ok(notes) => notes,
            Err(e) => {
                error!(error = %e, "error reading notes");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        Ok(self.load()?.into_iter().find(|note| &note.id == id))
    }

    /// Prepends a new note. `title` and `content` are stored as given.
    pub fn create(&self, title: &str, content: &str) -> StoreResult<Note> {
        let note = Note::new(title, content);
        let mut notes = self.load()?;
        notes.insert(0, note.clone());

        self.save(&notes)?;
        info!(id = %note.id, "created note");
        Ok(note)
    }

    /// Replaces the entry with the same id. Returns `false` and leaves storage
    /// untouched when no entry matches.
    pub fn update(&self, note: &Note) -> StoreResult<bool> {
        let mut notes = self.load()?;
        let Some(existing) = notes.iter_mut().find(|n| n.id == note.id) else {
            warn!(id = %note.id, "no note updated, id not found");
            return Ok(false);
        };
        *existing = note.clone();

        self.save(&notes)?;
        info!(id = %note.id, "updated note");
        Ok(true)
    }

    /// Removes the entry with `id`. Returns `false` when there was none.
    pub fn delete(&self, id: &NoteId) -> StoreResult<bool> {
        let mut notes = self.load()?;
        let before = notes.len();
        notes.retain(|note| &note.id != id);
        if notes.len() == before {
            warn!(id = %id, "no note deleted, id not found");
            return Ok(false);
        }

        self.save(&notes)?;
        info!(id = %id, "deleted note");
        Ok(true)
    }

    /// Updates `existing` with the draft, or creates a new note when there is
    /// nothing being edited. Editing a note that is no longer stored fails with
    /// [`StoreError::NotFound`].
    pub fn save_draft(&self, draft: &NoteDraft, existing: Option<&Note>) -> StoreResult<Note> {
        match existing {
            Some(note) => {
                let updated = draft.apply_to(note);
                if !self.update(&updated)? {
                    return Err(StoreError::NotFound(updated.id));
                }
                Ok(updated)
            }
            None => self.create(draft.title(), draft.content()),
        }
    }

    fn save(&self, notes: &[Note]) -> StoreResult<()> {
        let raw = serde_json::to_string(notes).map_err(StoreError::Encode)?;
        if let Err(e) = self.slot.set(&self.key, &raw) {
            error!(error = %e, "error saving notes list");
            return Err(e.into());
        }
        debug!(count = notes.len(), bytes = raw.len(), "saved notes list");
        Ok(())
    }
}
