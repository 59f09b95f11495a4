/// Basic integration tests covering persistence and backup flows
use habitrack::*;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_persistence_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("habits.json"));
        let today = dates::today();

        let mut tracker = HabitTracker::new();
        let id = tracker.add_habit("Morning Run").unwrap();
        tracker.log_habit(id, today - Duration::days(1), true).unwrap();
        tracker.log_habit(id, today, true).unwrap();
        tracker.save_to(&store).unwrap();

        let reloaded = HabitTracker::load_from(&store);
        assert_eq!(reloaded.habits().len(), 1);

        let habit = reloaded.habit(id).unwrap();
        assert_eq!(habit.name, "Morning Run");
        assert_eq!(habit.history.len(), 2);
        assert_eq!(habit.streak, 2);
        assert_eq!(habit.longest_streak, 2);
    }

    #[test]
    fn test_load_without_prior_data_starts_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        let tracker = HabitTracker::load_from(&store);
        assert!(tracker.habits().is_empty());
    }

    #[test]
    fn test_load_with_corrupt_data_starts_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");
        std::fs::write(&path, "definitely not json").unwrap();

        let tracker = HabitTracker::load_from(&JsonFileStore::new(path));
        assert!(tracker.habits().is_empty());
    }

    #[test]
    fn test_load_recomputes_derived_fields() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("habits.json"));
        let today = dates::today();

        let mut tracker = HabitTracker::new();
        let id = tracker.add_habit("Stretch").unwrap();
        tracker.log_habit(id, today, true).unwrap();

        // Corrupt the cached fields before saving; the loaded tracker must
        // not trust them.
        let mut backup = tracker.export();
        backup.habits[0].streak = 99;
        backup.habits[0].longest_streak = 99;
        store.save(&backup.habits).unwrap();

        let reloaded = HabitTracker::load_from(&store);
        let habit = reloaded.habit(id).unwrap();
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.longest_streak, 1);
    }

    #[test]
    fn test_backup_export_import_round_trip() {
        let today = dates::today();

        let mut source = HabitTracker::new();
        let run = source.add_habit("Run").unwrap();
        source.add_habit("Read").unwrap();
        source.log_habit(run, today - Duration::days(1), true).unwrap();
        source.log_habit(run, today, true).unwrap();

        let json = source.export().to_json().unwrap();

        let mut target = HabitTracker::new();
        let count = target.import(Backup::parse(&json).unwrap());

        assert_eq!(count, 2);
        assert_eq!(target.habits().len(), 2);
        let habit = target.habit(run).unwrap();
        assert_eq!(habit.streak, 2);
        assert_eq!(habit.history.len(), 2);
    }

    #[test]
    fn test_import_recomputes_derived_fields() {
        let today = dates::today();

        let mut source = HabitTracker::new();
        let id = source.add_habit("Run").unwrap();
        source.log_habit(id, today, true).unwrap();

        // Tampered derived fields in the backup must be re-derived on import.
        let mut backup = source.export();
        backup.habits[0].streak = 42;
        backup.habits[0].missed = 42;

        let mut target = HabitTracker::new();
        target.import(backup);

        let habit = target.habit(id).unwrap();
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.missed, 0);
    }

    #[test]
    fn test_invalid_backup_leaves_state_untouched() {
        let mut tracker = HabitTracker::new();
        tracker.add_habit("Run").unwrap();

        // Parsing fails before import can touch the tracker.
        let result = Backup::parse(r#"{"exportDate": "2024-01-01T00:00:00Z"}"#);
        assert!(result.is_err());
        assert_eq!(tracker.habits().len(), 1);
    }

    #[test]
    fn test_storage_trait_object_compatible() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("habits.json"));

        let _: &dyn HabitStore = &store;
    }
}
