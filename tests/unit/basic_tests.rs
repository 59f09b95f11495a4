/// Basic unit tests to verify core tracker functionality
use habitrack::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_add_habit() {
        let mut tracker = HabitTracker::new();
        let id = tracker.add_habit("Morning Run").unwrap();

        assert_eq!(tracker.habits().len(), 1);
        let habit = tracker.habit(id).unwrap();
        assert_eq!(habit.name, "Morning Run");
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn test_add_habit_rejects_blank_names() {
        let mut tracker = HabitTracker::new();

        assert!(tracker.add_habit("").is_err());
        assert!(tracker.add_habit("   ").is_err());
        assert!(tracker.habits().is_empty());
    }

    #[test]
    fn test_log_updates_cached_stats() {
        let mut tracker = HabitTracker::new();
        let id = tracker.add_habit("Read").unwrap();
        let today = dates::today();

        assert!(tracker.log_habit(id, today, true).unwrap());

        let habit = tracker.habit(id).unwrap();
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.longest_streak, 1);
        assert_eq!(habit.missed, 0);
    }

    #[test]
    fn test_log_unknown_habit_is_noop() {
        let mut tracker = HabitTracker::new();
        tracker.add_habit("Read").unwrap();

        let logged = tracker.log_habit(HabitId::new(), dates::today(), true).unwrap();

        assert!(!logged);
        assert!(tracker.habits()[0].history.is_empty());
    }

    #[test]
    fn test_log_future_date_rejected() {
        let mut tracker = HabitTracker::new();
        let id = tracker.add_habit("Read").unwrap();
        let tomorrow = dates::today() + Duration::days(1);

        assert!(tracker.log_habit(id, tomorrow, true).is_err());
        assert!(tracker.habit(id).unwrap().history.is_empty());
    }

    #[test]
    fn test_log_past_date_allowed() {
        let mut tracker = HabitTracker::new();
        let id = tracker.add_habit("Read").unwrap();
        let last_week = dates::today() - Duration::days(7);

        assert!(tracker.log_habit(id, last_week, true).unwrap());
        assert_eq!(tracker.habit(id).unwrap().history.len(), 1);
    }

    #[test]
    fn test_delete_habit() {
        let mut tracker = HabitTracker::new();
        let id = tracker.add_habit("Read").unwrap();

        assert!(tracker.delete_habit(id));
        assert!(tracker.habits().is_empty());

        // Unknown ids are a no-op
        assert!(!tracker.delete_habit(id));
    }

    #[test]
    fn test_summary_over_tracker() {
        let mut tracker = HabitTracker::new();
        let run = tracker.add_habit("Run").unwrap();
        let read = tracker.add_habit("Read").unwrap();
        let today = dates::today();

        tracker.log_habit(run, today - Duration::days(1), true).unwrap();
        tracker.log_habit(run, today, true).unwrap();
        tracker.log_habit(read, today, false).unwrap();

        let summary = tracker.summary();
        assert_eq!(summary.total_completed, 2);
        assert_eq!(summary.overall_completion_rate, 67);
        assert_eq!(summary.longest_streak, 2);
        assert_eq!(summary.current_streak_sum, 2);
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut tracker = HabitTracker::new();
        tracker.add_habit("Run").unwrap();
        tracker.add_habit("Read").unwrap();

        tracker.reset();

        assert!(tracker.habits().is_empty());
        assert_eq!(tracker.summary(), SummaryStats::default());
    }
}
