//! Repository Integration Tests
//!
//! Tests for LmsStorage against the in-memory backend.

#[cfg(test)]
mod tests {
    use crate::domain::{MilestoneDraft, NoteCategory, NoteDraft, VideoProgressUpdate};
    use crate::repository::{Clock, FixedClock, LmsStorage, MemoryStorage, StorageError, StorageKeys};
    use chrono::{Duration, TimeZone, Utc};

    fn setup(backend: &MemoryStorage) -> LmsStorage<&MemoryStorage, FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap());
        LmsStorage::with_clock(backend, StorageKeys::default(), clock)
    }

    fn draft(text: &str, timestamp: &str) -> NoteDraft {
        NoteDraft::new(text, timestamp, NoteCategory::General)
    }

    #[test]
    fn test_save_note_stamps_id_and_saved_at() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        let note = storage.save_note("web-dev", "1", draft("Intro", "00:01:00")).expect("save note");
        assert_eq!(note.id, format!("note_{}", storage.clock().now().timestamp_millis()));
        assert_eq!(note.saved_at, storage.clock().now());

        let raw = backend.raw("daiel_notes").expect("notes document");
        assert!(raw.contains("\"web-dev_1\""));
        assert!(raw.contains("\"savedAt\""));
    }

    #[test]
    fn test_notes_returned_sorted_by_timestamp() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        storage.save_note("web-dev", "1", draft("late", "01:00:00")).unwrap();
        storage.clock().advance(Duration::milliseconds(5));
        storage.save_note("web-dev", "1", draft("early", "00:00:05")).unwrap();
        storage.clock().advance(Duration::milliseconds(5));
        storage.save_note("web-dev", "1", draft("middle", "00:10:00")).unwrap();

        let texts: Vec<String> = storage
            .get_notes_by_video("web-dev", "1")
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert_eq!(texts, vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_notes_are_scoped_by_course_and_video() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        storage.save_note("web-dev", "1", draft("a", "00:00:01")).unwrap();
        storage.save_note("web-dev", "2", draft("b", "00:00:01")).unwrap();
        storage.save_note("python-ml", "1", draft("c", "00:00:01")).unwrap();

        assert_eq!(storage.get_notes_by_video("web-dev", "1").len(), 1);
        assert_eq!(storage.get_notes_by_video("web-dev", "3").len(), 0);
        assert_eq!(storage.get_all_notes().len(), 3);
    }

    #[test]
    fn test_rapid_saves_get_distinct_ids() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        let first = storage.save_note("web-dev", "1", draft("one", "00:00:01")).unwrap();
        let second = storage.save_note("web-dev", "1", draft("two", "00:00:02")).unwrap();
        assert_ne!(first.id, second.id);

        assert!(storage.delete_note("web-dev", "1", &first.id));
        let remaining = storage.get_notes_by_video("web-dev", "1");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
    }

    #[test]
    fn test_delete_note_without_key_returns_false() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        assert!(!storage.delete_note("web-dev", "1", "note_123"));
        assert!(backend.raw("daiel_notes").is_none());
    }

    #[test]
    fn test_delete_unknown_id_under_existing_key_returns_false() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        let note = storage.save_note("web-dev", "1", draft("keep me", "00:00:01")).unwrap();
        let before = backend.raw("daiel_notes");

        assert!(!storage.delete_note("web-dev", "1", "note_does_not_exist"));
        assert!(!storage.try_delete_note("web-dev", "1", "note_does_not_exist").unwrap());
        assert_eq!(backend.raw("daiel_notes"), before);

        let remaining = storage.get_notes_by_video("web-dev", "1");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, note.id);
    }

    #[test]
    fn test_save_note_over_quota_keeps_previous_data() {
        let backend = MemoryStorage::with_quota(300);
        let storage = setup(&backend);

        storage.save_note("web-dev", "1", draft("short", "00:00:01")).unwrap();
        let before = backend.raw("daiel_notes");

        let long_text = "x".repeat(500);
        assert!(storage.save_note("web-dev", "1", draft(&long_text, "00:00:02")).is_none());
        assert_eq!(backend.raw("daiel_notes"), before);

        let err = storage
            .try_save_note("web-dev", "1", draft(&long_text, "00:00:02"))
            .unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    }

    #[test]
    fn test_malformed_document_reads_as_empty() {
        let backend = MemoryStorage::new();
        backend.insert_raw("daiel_notes", "{not json");
        backend.insert_raw("daiel_video_progress", "[]");
        let storage = setup(&backend);

        assert!(storage.get_all_notes().is_empty());
        assert!(storage.get_notes_by_video("web-dev", "1").is_empty());
        assert!(storage.get_video_progress("1").is_none());
        assert!(matches!(storage.try_get_all_notes(), Err(StorageError::Serde(_))));

        // a failed read must not clobber the stored document
        assert!(storage.save_note("web-dev", "1", draft("a", "00:00:01")).is_none());
        assert_eq!(backend.raw("daiel_notes").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_video_progress_last_write_wins() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        assert!(storage.save_video_progress("1", VideoProgressUpdate::from_playback(10.0, 100.0)));
        storage.clock().advance(Duration::seconds(30));
        assert!(storage.save_video_progress("1", VideoProgressUpdate::from_playback(40.0, 100.0)));

        let progress = storage.get_video_progress("1").unwrap();
        assert_eq!(progress.current_time, 40.0);
        assert_eq!(progress.progress, 40.0);
        assert_eq!(progress.last_watched, storage.clock().now());
        assert_eq!(storage.get_all_video_progress().len(), 1);
        assert!(storage.get_video_progress("2").is_none());
    }

    #[test]
    fn test_milestones_per_course() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        let first = storage
            .save_milestone("web-dev", MilestoneDraft { title: "Finished intro".to_string(), module_id: Some(1) })
            .unwrap();
        let second = storage
            .save_milestone("web-dev", MilestoneDraft { title: "Finished basics".to_string(), module_id: Some(2) })
            .unwrap();
        assert!(first.id.starts_with("milestone_"));
        assert_ne!(first.id, second.id);

        assert_eq!(storage.get_milestones("web-dev").len(), 2);
        assert!(storage.get_milestones("python-ml").is_empty());
        assert!(storage.get_all_milestones().contains_key("course_web-dev"));
    }

    #[test]
    fn test_sandbox_code_overwrites() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        assert!(storage.save_sandbox_code("html-1", "<p>hi</p>"));
        assert!(storage.save_sandbox_code("html-1", "<p>bye</p>"));
        assert_eq!(storage.get_sandbox_code("html-1").map(|s| s.code), Some("<p>bye</p>".to_string()));
        assert!(storage.get_sandbox_code("css-1").is_none());
    }

    #[test]
    fn test_export_and_clear() {
        let backend = MemoryStorage::new();
        let storage = setup(&backend);

        storage.save_note("web-dev", "1", draft("a", "00:00:01")).unwrap();
        storage.save_video_progress("1", VideoProgressUpdate::from_playback(1.0, 2.0));
        storage.save_sandbox_code("s", "code");

        let export = storage.export_all_data();
        assert!(export.user_data.is_none());
        assert_eq!(export.notes.len(), 1);
        assert_eq!(export.video_progress.len(), 1);
        assert_eq!(export.sandbox_code.len(), 1);
        assert_eq!(storage.try_export_all_data().unwrap(), export);

        backend.insert_raw("unrelated", "keep");
        assert!(storage.clear_all_data());
        assert_eq!(backend.len(), 1);
        assert!(storage.export_all_data().is_empty());
    }

    #[test]
    fn test_unavailable_backend_degrades() {
        let backend = MemoryStorage::unavailable();
        let storage = setup(&backend);

        assert!(storage.save_note("web-dev", "1", draft("a", "00:00:01")).is_none());
        assert!(storage.get_notes_by_video("web-dev", "1").is_empty());
        assert!(!storage.delete_note("web-dev", "1", "note_1"));
        assert!(!storage.save_video_progress("1", VideoProgressUpdate::from_playback(1.0, 2.0)));
        assert!(storage.get_user_data().is_none());
        assert!(!storage.clear_all_data());
        assert!(storage.export_all_data().is_empty());
    }

    #[test]
    fn test_custom_namespace() {
        let backend = MemoryStorage::new();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap());
        let storage = LmsStorage::with_clock(&backend, StorageKeys::new("staging"), clock);

        storage.save_sandbox_code("s", "code");
        assert!(backend.raw("staging_sandbox_code").is_some());
        assert!(backend.raw("daiel_sandbox_code").is_none());
    }
}
