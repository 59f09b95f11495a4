/// Aggregate metrics and cross-habit rollups
///
/// This module provides the completion-rate calculations and the summary
/// figures consumed by the stats view. Everything here is a pure function
/// over current history state - there is no incremental counter to keep in
/// sync, recomputation happens on demand.

use crate::domain::{dates, Habit, History};

/// Completion rate for one habit as a rounded percentage
///
/// Defined as 0 when there are no entries, so an empty history never
/// divides by zero.
pub fn completion_rate(history: &History) -> u32 {
    rate(history.completed_count(), history.len() as u32)
}

/// Completion rate over the entries falling within one calendar month
///
/// Entries are filtered to the month's first and last day inclusive.
/// Returns 0 for a month with no entries, and for an invalid month number.
pub fn month_completion_rate(history: &History, year: i32, month: u32) -> u32 {
    let Some((first, last)) = dates::month_bounds(year, month) else {
        return 0;
    };

    let mut total = 0;
    let mut completed = 0;
    for entry in history.iter() {
        if entry.date >= first && entry.date <= last {
            total += 1;
            if entry.done {
                completed += 1;
            }
        }
    }
    rate(completed, total)
}

/// Global completion rate across every habit's entries
pub fn overall_completion_rate(habits: &[Habit]) -> u32 {
    let total: u32 = habits.iter().map(|h| h.history.len() as u32).sum();
    let completed: u32 = habits.iter().map(|h| h.history.completed_count()).sum();
    rate(completed, total)
}

fn rate(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(completed) / f64::from(total) * 100.0).round() as u32
}

/// Cross-habit summary consumed by the stats view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    /// Total done entries across all habits
    pub total_completed: u32,
    /// Global completion rate over every logged entry
    pub overall_completion_rate: u32,
    /// Best longest streak across habits, 0 when there are none
    pub longest_streak: u32,
    /// Sum of current streaks - a combined momentum figure, not a maximum
    pub current_streak_sum: u32,
}

impl SummaryStats {
    /// Roll up summary statistics from the current habit list
    ///
    /// Reads the cached per-habit streak fields, which are kept current
    /// after every mutation.
    pub fn from_habits(habits: &[Habit]) -> Self {
        Self {
            total_completed: habits.iter().map(|h| h.history.completed_count()).sum(),
            overall_completion_rate: overall_completion_rate(habits),
            longest_streak: habits.iter().map(|h| h.longest_streak).max().unwrap_or(0),
            current_streak_sum: habits.iter().map(|h| h.streak).sum(),
        }
    }
}
