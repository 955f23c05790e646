use chrono::{DateTime, Local, Utc};

use crate::models::Note;

/// Newest `date` first. Notes sharing a timestamp keep their relative order.
pub fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Case-insensitive substring match on title or content. An empty query
/// matches every note.
pub fn matches(note: &Note, query: &str) -> bool {
    let query = query.to_lowercase();
    note.title.to_lowercase().contains(&query) || note.content.to_lowercase().contains(&query)
}

pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| matches(note, query)).collect()
}

/// What the list screen shows after a load: sorted newest first, then
/// narrowed by the search box.
pub fn list_view(mut notes: Vec<Note>, query: &str) -> Vec<Note> {
    sort_newest_first(&mut notes);
    notes.retain(|note| matches(note, query));
    notes
}

/// "<date> at <HH:MM>" in local time.
pub fn format_date_time(date: &DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    format!("{} at {}", local.format("%x"), local.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn note_at(title: &str, content: &str, minutes: i64) -> Note {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Note {
            date: base + Duration::minutes(minutes),
            ..Note::new(title, content)
        }
    }

    #[test]
    fn sorts_by_date_descending_regardless_of_storage_order() {
        let mut notes = vec![
            note_at("old", "", 0),
            note_at("newest", "", 30),
            note_at("middle", "", 10),
        ];
        sort_newest_first(&mut notes);

        let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "old"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let notes = vec![
            note_at("Groceries", "Milk, eggs", 0),
            note_at("Work", "call the MILKMAN", 1),
            note_at("Ideas", "nothing here", 2),
        ];

        let hits: Vec<_> = filter_notes(&notes, "milk")
            .into_iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(hits, vec!["Groceries", "Work"]);

        assert_eq!(filter_notes(&notes, "IDEAS").len(), 1);
        assert!(filter_notes(&notes, "absent").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let notes = vec![note_at("a", "b", 0), note_at("c", "d", 1)];
        assert_eq!(filter_notes(&notes, "").len(), 2);
    }

    #[test]
    fn list_view_sorts_then_filters() {
        let notes = vec![
            note_at("Groceries", "Milk", 0),
            note_at("Other", "skip", 5),
            note_at("More groceries", "Bread", 10),
        ];

        let view = list_view(notes, "grocer");
        let titles: Vec<_> = view.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["More groceries", "Groceries"]);
    }

    #[test]
    fn formatted_date_contains_time_of_day() {
        let note = note_at("a", "b", 0);
        let formatted = format_date_time(&note.date);
        let local = note.date.with_timezone(&Local);

        assert!(formatted.contains(" at "));
        assert!(formatted.ends_with(&local.format("%H:%M").to_string()));
    }
}
