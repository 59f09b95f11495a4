/// Streak calculation from a habit's completion history
///
/// This module derives the three cached statistics - current streak,
/// longest streak, and missed count - from the raw history. Two separate
/// passes with opposite sort orders are deliberate: the current streak must
/// anchor to today/yesterday to express "is this chain alive right now",
/// while the longest streak is a pure historical scan that never looks at
/// the present date. Folding them together would either invalidate a live
/// streak once a day passes without logging, or lose the historical record
/// after a chain breaks.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{dates, History, HistoryEntry};

/// Derived streak statistics for one habit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Consecutive done days ending at today or yesterday
    pub current_streak: u32,
    /// Best consecutive-done run ever observed, including the current one
    pub longest_streak: u32,
    /// Total entries logged as not done
    pub missed: u32,
}

impl Streak {
    /// Calculate streak statistics from a habit's full history
    ///
    /// `today` is passed in explicitly rather than read from a clock, so
    /// the calculation is pure and a single operation never straddles
    /// midnight. The history may arrive in any order; future-dated entries
    /// are assumed not to exist (the caller enforces that on write).
    pub fn calculate(history: &History, today: NaiveDate) -> Self {
        if history.is_empty() {
            return Self::default();
        }

        let newest_first = history.sorted_descending();
        let current_streak = Self::current_run(&newest_first, today);

        let oldest_first = history.sorted_ascending();
        let longest_streak = Self::longest_run(&oldest_first, current_streak);

        Self {
            current_streak,
            longest_streak,
            missed: history.missed_count(),
        }
    }

    /// Count the unbroken consecutive-day run of done entries ending at the
    /// most recent entry
    ///
    /// The run is only alive if the most recent entry is dated today or
    /// yesterday: one day of not-yet-logged grace, but a logged miss for
    /// today/yesterday kills the streak immediately.
    fn current_run(newest_first: &[HistoryEntry], today: NaiveDate) -> u32 {
        let most_recent = match newest_first.first() {
            Some(entry) => entry,
            None => return 0,
        };

        let yesterday = today - Duration::days(1);
        if most_recent.date != today && most_recent.date != yesterday {
            return 0;
        }
        if !most_recent.done {
            return 0;
        }

        let mut streak = 1;
        for pair in newest_first.windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);
            // A gap of more than one day and a logged miss both end the run
            // at the same point.
            if dates::day_difference(older.date, newer.date) == 1 && older.done {
                streak += 1;
            } else {
                break;
            }
        }
        streak
    }

    /// Scan oldest-to-newest for the best consecutive-done run
    ///
    /// Seeded with the current streak, so an active run that has not yet
    /// reached a closure point is still eligible to be the longest while in
    /// progress.
    fn longest_run(oldest_first: &[HistoryEntry], current_streak: u32) -> u32 {
        let mut longest = current_streak;
        let mut run = 0;

        for (i, entry) in oldest_first.iter().enumerate() {
            if !entry.done {
                run = 0;
                continue;
            }
            run += 1;

            // A run closes at the last entry, before a logged miss, or
            // before a gap of more than one day.
            let closes = match oldest_first.get(i + 1) {
                None => true,
                Some(next) => !next.done || dates::day_difference(entry.date, next.date) > 1,
            };
            if closes {
                longest = longest.max(run);
                run = 0;
            }
        }

        longest
    }
}
