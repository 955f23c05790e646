use unicode_segmentation::UnicodeSegmentation;

use crate::models::{DraftError, Note};

pub const MAX_TITLE_LEN: usize = 100;

/// Title and content as typed into the editor, trimmed and checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    content: String,
}

impl NoteDraft {
    pub fn new(title: &str, content: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(DraftError::EmptyContent);
        }

        // Counted in graphemes so an emoji or accented letter is one character.
        let len = title.graphemes(true).count();
        if len > MAX_TITLE_LEN {
            return Err(DraftError::TitleTooLong {
                len,
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The edited copy of `note`: id and date carry over unchanged.
    pub fn apply_to(&self, note: &Note) -> Note {
        Note {
            title: self.title.clone(),
            content: self.content.clone(),
            ..note.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_fields() {
        let draft = NoteDraft::new("  Groceries\n", "\tMilk, eggs  ").unwrap();
        assert_eq!(draft.title(), "Groceries");
        assert_eq!(draft.content(), "Milk, eggs");
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(NoteDraft::new("   ", "body"), Err(DraftError::EmptyTitle));
        assert_eq!(NoteDraft::new("title", " \n "), Err(DraftError::EmptyContent));
        assert_eq!(NoteDraft::new("", ""), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn title_limit_counts_graphemes() {
        let exact = "é".repeat(MAX_TITLE_LEN);
        assert!(NoteDraft::new(&exact, "body").is_ok());

        let flags = "🇳🇴".repeat(MAX_TITLE_LEN);
        assert!(NoteDraft::new(&flags, "body").is_ok());

        let long = "a".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            NoteDraft::new(&long, "body"),
            Err(DraftError::TitleTooLong {
                len: MAX_TITLE_LEN + 1,
                max: MAX_TITLE_LEN
            })
        );
    }

    #[test]
    fn apply_keeps_identity_and_date() {
        let note = Note::new("old", "old body");
        let edited = NoteDraft::new("new", "new body").unwrap().apply_to(&note);

        assert_eq!(edited.id, note.id);
        assert_eq!(edited.date, note.date);
        assert_eq!(edited.title, "new");
        assert_eq!(edited.content, "new body");
    }
}
