//! Note Entity
//!
//! Timestamped annotations attached to a (course, video) pair.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{next_time_id, Entity};
use crate::timestamp::timestamp_to_seconds;

/// Note category determines color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    #[default]
    General,
    Important,
    Idea,
    Review,
    Question,
}

impl NoteCategory {
    pub const ALL: [NoteCategory; 5] = [
        NoteCategory::General,
        NoteCategory::Important,
        NoteCategory::Idea,
        NoteCategory::Review,
        NoteCategory::Question,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteCategory::General => "general",
            NoteCategory::Important => "important",
            NoteCategory::Idea => "idea",
            NoteCategory::Review => "review",
            NoteCategory::Question => "question",
        }
    }

    /// Unknown names fall back to `General`
    pub fn from_name(s: &str) -> Self {
        match s {
            "important" => NoteCategory::Important,
            "idea" => NoteCategory::Idea,
            "review" => NoteCategory::Review,
            "question" => NoteCategory::Question,
            _ => NoteCategory::General,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteCategory::General => "General",
            NoteCategory::Important => "Important",
            NoteCategory::Idea => "Idea",
            NoteCategory::Review => "Review",
            NoteCategory::Question => "Question",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NoteCategory::General => "#6C63FF",
            NoteCategory::Important => "#FF6B6B",
            NoteCategory::Idea => "#FFD93D",
            NoteCategory::Review => "#6BCB77",
            NoteCategory::Question => "#4D96FF",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoteCategory::General => "📝",
            NoteCategory::Important => "⭐",
            NoteCategory::Idea => "💡",
            NoteCategory::Review => "🔍",
            NoteCategory::Question => "❓",
        }
    }
}

impl<'de> Deserialize<'de> for NoteCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(NoteCategory::from_name(&raw))
    }
}

/// Fields supplied by the note form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub text: String,
    /// `HH:MM:SS` position the note refers to
    pub timestamp: String,
    #[serde(default)]
    pub category: NoteCategory,
}

impl NoteDraft {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>, category: NoteCategory) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
            category,
        }
    }
}

/// A saved note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub text: String,
    pub timestamp: String,
    #[serde(default)]
    pub category: NoteCategory,
    pub saved_at: DateTime<Utc>,
}

impl Note {
    pub fn from_draft(draft: NoteDraft, id: String, saved_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: draft.text,
            timestamp: draft.timestamp,
            category: draft.category,
            saved_at,
        }
    }

    /// Playback position in seconds (zero when the timestamp is malformed)
    pub fn position_secs(&self) -> u64 {
        timestamp_to_seconds(&self.timestamp)
    }
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Notes keyed by `"{courseId}_{videoId}"`
pub type NotesMap = BTreeMap<String, Vec<Note>>;

/// Stable ascending sort by timestamp seconds
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by_key(Note::position_secs);
}

/// `note_<millis>`, unique within `existing`
pub fn next_note_id(existing: &[Note], millis: i64) -> String {
    next_time_id("note", existing, millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note(id: &str, timestamp: &str) -> Note {
        Note::from_draft(
            NoteDraft::new(format!("text {}", id), timestamp, NoteCategory::General),
            id.to_string(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_sort_notes_by_seconds() {
        let mut notes = vec![
            note("a", "00:10:00"),
            note("b", "00:00:30"),
            note("c", "01:00:00"),
            note("d", "05:00"), // 2-part form is MM:SS
        ];
        sort_notes(&mut notes);
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let mut notes = vec![note("first", "00:01:00"), note("bad", "garbage"), note("second", "00:01:00")];
        sort_notes(&mut notes);
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["bad", "first", "second"]);
    }

    #[test]
    fn test_oversized_timestamp_sorts_as_zero() {
        let mut notes = vec![note("a", "00:00:10"), note("huge", "9999999999999999:00:00")];
        sort_notes(&mut notes);
        assert_eq!(notes[0].id, "huge");
        assert_eq!(notes[0].position_secs(), 0);
    }

    #[test]
    fn test_next_note_id_suffixes_collisions() {
        let mut existing = vec![];
        assert_eq!(next_note_id(&existing, 1000), "note_1000");
        existing.push(note("note_1000", "00:00:01"));
        assert_eq!(next_note_id(&existing, 1000), "note_1000_1");
        existing.push(note("note_1000_1", "00:00:01"));
        assert_eq!(next_note_id(&existing, 1000), "note_1000_2");
        assert_eq!(next_note_id(&existing, 1001), "note_1001");
    }

    #[test]
    fn test_category_fallback_and_metadata() {
        let parsed: NoteCategory = serde_json::from_str("\"question\"").unwrap();
        assert_eq!(parsed, NoteCategory::Question);
        let unknown: NoteCategory = serde_json::from_str("\"todo\"").unwrap();
        assert_eq!(unknown, NoteCategory::General);
        assert_eq!(NoteCategory::from_name("idea"), NoteCategory::Idea);
        assert_eq!(NoteCategory::from_name("IDEA"), NoteCategory::General);
        assert_eq!(NoteCategory::Important.color(), "#FF6B6B");
        assert_eq!(serde_json::to_string(&NoteCategory::Idea).unwrap(), "\"idea\"");
    }

    #[test]
    fn test_note_json_shape() {
        let json = r#"{"id":"note_1","text":"hi","timestamp":"00:00:05","category":"review","savedAt":"2025-03-01T12:00:00.000Z"}"#;
        let parsed: Note = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.category, NoteCategory::Review);
        assert_eq!(parsed.position_secs(), 5);
        let value = serde_json::to_value(&parsed).unwrap();
        assert!(value.get("savedAt").is_some());
    }
}
