//! Consecutive-day streak computation
//!
//! The current streak is anchored at today, or at yesterday when today has
//! not been checked off yet, and walks backward until the first missing day.

use std::collections::BTreeSet;

use crate::core::calendar::{CalendarDay, completion_days};
use crate::core::types::Habit;
use crate::utils::Timezone;

/// Current streak for a set of completion timestamps
pub(crate) fn compute_streak(completed: &[i64], today: CalendarDay, tz: Timezone) -> u32 {
    streak_from_days(&completion_days(completed, tz), today)
}

/// Current streak over already normalized completion days
pub(crate) fn streak_from_days(days: &BTreeSet<CalendarDay>, today: CalendarDay) -> u32 {
    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(day) = cursor
        && days.contains(&day)
    {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Longest run of consecutive completion days ever recorded
pub(crate) fn longest_streak(days: &BTreeSet<CalendarDay>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<CalendarDay> = None;

    for &day in days {
        run = match prev {
            Some(p) if p.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }
    best
}

/// Highest cached current streak across habits
pub(crate) fn best_current_streak(habits: &[Habit]) -> u32 {
    habits.iter().map(|h| h.current_streak).max().unwrap_or(0)
}
