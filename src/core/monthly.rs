//! Per-day consistency stats for a calendar month

use std::collections::BTreeSet;

use crate::core::calendar::{CalendarDay, month_days, shift_month};
use crate::core::types::{DayStat, DayStatus, Habit};
use crate::error::AppError;
use crate::utils::Timezone;

/// One record per day of the month `month_offset` months away from `today`'s
/// month, ascending by day.
pub(crate) fn compute_monthly_stats(
    habits: &[Habit],
    month_offset: i32,
    today: CalendarDay,
    tz: Timezone,
) -> Vec<DayStat> {
    let (year, month) = shift_month(today, month_offset);
    let completion_sets: Vec<BTreeSet<CalendarDay>> =
        habits.iter().map(|h| h.completion_days(tz)).collect();
    let total = completion_sets.len();

    month_days(year, month)
        .map(|day| {
            let completed = completion_sets.iter().filter(|s| s.contains(&day)).count();
            let ratio = if total > 0 {
                completed as f64 / total as f64
            } else {
                0.0
            };
            DayStat {
                day,
                timestamp: tz.start_of_day_ms(day),
                status: day_status(day > today, completed, total),
                ratio,
            }
        })
        .collect()
}

// Precedence: future, then no habits, then the completion ratio.
fn day_status(is_future: bool, completed: usize, total: usize) -> DayStatus {
    if is_future {
        DayStatus::Future
    } else if total == 0 {
        DayStatus::Empty
    } else if completed == total {
        DayStatus::Completed
    } else if completed > 0 {
        DayStatus::Partial
    } else {
        DayStatus::Missed
    }
}

/// Localized month and weekday names for calendar headings
#[derive(Debug, Clone, Copy)]
pub(crate) struct MonthNames {
    names: [&'static str; 12],
    /// Monday first
    weekdays: [&'static str; 7],
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const ES_MONTHS: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto", "Septiembre",
    "Octubre", "Noviembre", "Diciembre",
];

const DE_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

const FR_MONTHS: [&str; 12] = [
    "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août", "Septembre",
    "Octobre", "Novembre", "Décembre",
];

const EN_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const ES_WEEKDAYS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];
const DE_WEEKDAYS: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];
const FR_WEEKDAYS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

impl Default for MonthNames {
    fn default() -> Self {
        MonthNames {
            names: EN_MONTHS,
            weekdays: EN_WEEKDAYS,
        }
    }
}

impl MonthNames {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(MonthNames::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(MonthNames::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        let (names, weekdays) = match base.as_str() {
            "en" => (EN_MONTHS, EN_WEEKDAYS),
            "es" => (ES_MONTHS, ES_WEEKDAYS),
            "de" => (DE_MONTHS, DE_WEEKDAYS),
            "fr" => (FR_MONTHS, FR_WEEKDAYS),
            _ => {
                return Err(AppError::UnsupportedLocale {
                    input: trimmed.to_string(),
                });
            }
        };
        Ok(MonthNames { names, weekdays })
    }

    pub(crate) fn weekday_headers(&self) -> [&'static str; 7] {
        self.weekdays
    }

    pub(crate) fn label(&self, year: i32, month: u32) -> String {
        let name = month
            .checked_sub(1)
            .and_then(|i| self.names.get(i as usize))
            .copied()
            .unwrap_or("?");
        format!("{name} {year}")
    }
}

/// A month of day stats with its heading
#[derive(Debug, Clone)]
pub(crate) struct MonthView {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) label: String,
    pub(crate) days: Vec<DayStat>,
}

pub(crate) fn month_view(
    habits: &[Habit],
    month_offset: i32,
    today: CalendarDay,
    tz: Timezone,
    names: MonthNames,
) -> MonthView {
    let (year, month) = shift_month(today, month_offset);
    MonthView {
        year,
        month,
        label: names.label(year, month),
        days: compute_monthly_stats(habits, month_offset, today, tz),
    }
}

/// Status counts over a month
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct MonthSummary {
    pub(crate) completed: usize,
    pub(crate) partial: usize,
    pub(crate) missed: usize,
    pub(crate) future: usize,
    pub(crate) empty: usize,
    /// Mean ratio over elapsed days that had habits
    pub(crate) average_ratio: Option<f64>,
}

impl MonthSummary {
    pub(crate) fn from_days(days: &[DayStat]) -> Self {
        let mut summary = MonthSummary::default();
        let mut ratio_sum = 0.0;
        let mut tracked = 0usize;

        for stat in days {
            match stat.status {
                DayStatus::Completed => summary.completed += 1,
                DayStatus::Partial => summary.partial += 1,
                DayStatus::Missed => summary.missed += 1,
                DayStatus::Future => summary.future += 1,
                DayStatus::Empty => summary.empty += 1,
            }
            if matches!(
                stat.status,
                DayStatus::Completed | DayStatus::Partial | DayStatus::Missed
            ) {
                ratio_sum += stat.ratio;
                tracked += 1;
            }
        }

        if tracked > 0 {
            summary.average_ratio = Some(ratio_sum / tracked as f64);
        }
        summary
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    const UTC: Timezone = Timezone::Named(chrono_tz::UTC);

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn habit_done_on(days: &[NaiveDate]) -> Habit {
        let mut h = Habit::new("h", 0).unwrap();
        h.completed_dates = days.iter().map(|&day| UTC.start_of_day_ms(day)).collect();
        h
    }

    #[test]
    fn no_habits_is_all_empty() {
        let today = d(2026, 10, 31);
        let stats = compute_monthly_stats(&[], 0, today, UTC);
        assert_eq!(stats.len(), 31);
        assert!(stats.iter().all(|s| s.status == DayStatus::Empty && s.ratio == 0.0));
    }

    #[test]
    fn no_habits_future_days_are_future() {
        let today = d(2026, 10, 19);
        let stats = compute_monthly_stats(&[], 0, today, UTC);
        assert_eq!(stats[18].status, DayStatus::Empty);
        assert_eq!(stats[19].status, DayStatus::Future);
        assert_eq!(stats[19].ratio, 0.0);
    }

    #[test]
    fn emits_one_record_per_day_in_order() {
        let today = d(2026, 10, 19);
        let expected = [
            (-8, 28), // Feb 2026
            (-32, 29), // Feb 2024
            (-6, 30), // Apr 2026
            (0, 31),
        ];
        for (offset, len) in expected {
            let stats = compute_monthly_stats(&[], offset, today, UTC);
            assert_eq!(stats.len(), len, "offset {offset}");
            for (i, s) in stats.iter().enumerate() {
                assert_eq!(s.day.day() as usize, i + 1);
            }
        }
    }

    #[test]
    fn timestamps_are_start_of_day() {
        let today = d(2026, 10, 19);
        let stats = compute_monthly_stats(&[], 0, today, UTC);
        assert_eq!(stats[0].timestamp, UTC.start_of_day_ms(d(2026, 10, 1)));
        assert_eq!(stats[30].timestamp, UTC.start_of_day_ms(d(2026, 10, 31)));
    }

    #[test]
    fn single_habit_completed_missed_future() {
        let today = d(2026, 10, 10);
        let done: Vec<_> = (1..10).step_by(2).map(|n| d(2026, 10, n)).collect();
        let stats = compute_monthly_stats(&[habit_done_on(&done)], 0, today, UTC);

        for s in &stats {
            let n = s.day.day();
            let expected = if n > 10 {
                DayStatus::Future
            } else if n % 2 == 1 {
                DayStatus::Completed
            } else {
                DayStatus::Missed
            };
            assert_eq!(s.status, expected, "day {n}");
        }
    }

    #[test]
    fn today_itself_is_not_future() {
        let today = d(2026, 10, 10);
        let stats = compute_monthly_stats(&[habit_done_on(&[])], 0, today, UTC);
        assert_eq!(stats[9].status, DayStatus::Missed);
        assert_eq!(stats[10].status, DayStatus::Future);
    }

    #[test]
    fn two_habits_partial_and_completed() {
        let today = d(2026, 10, 19);
        let a = habit_done_on(&[d(2026, 10, 5), d(2026, 10, 6)]);
        let b = habit_done_on(&[d(2026, 10, 6)]);
        let stats = compute_monthly_stats(&[a, b], 0, today, UTC);

        assert_eq!(stats[4].status, DayStatus::Partial);
        assert_eq!(stats[4].ratio, 0.5);
        assert_eq!(stats[5].status, DayStatus::Completed);
        assert_eq!(stats[5].ratio, 1.0);
        assert_eq!(stats[6].status, DayStatus::Missed);
        assert_eq!(stats[6].ratio, 0.0);
    }

    #[test]
    fn three_habits_never_round_to_completed() {
        let today = d(2026, 10, 19);
        let day = d(2026, 10, 3);
        let habits = [
            habit_done_on(&[day]),
            habit_done_on(&[day]),
            habit_done_on(&[]),
        ];
        let stats = compute_monthly_stats(&habits, 0, today, UTC);
        assert_eq!(stats[2].status, DayStatus::Partial);
    }

    #[test]
    fn future_wins_over_completion() {
        let today = d(2026, 10, 19);
        let stats = compute_monthly_stats(&[habit_done_on(&[d(2026, 10, 25)])], 0, today, UTC);
        assert_eq!(stats[24].status, DayStatus::Future);
        assert_eq!(stats[24].ratio, 1.0);
    }

    #[test]
    fn previous_and_next_months() {
        let today = d(2026, 1, 15);
        let a = habit_done_on(&[d(2025, 12, 31)]);
        let prev = compute_monthly_stats(std::slice::from_ref(&a), -1, today, UTC);
        assert_eq!(prev[0].day, d(2025, 12, 1));
        assert_eq!(prev[30].status, DayStatus::Completed);
        assert_eq!(prev[29].status, DayStatus::Missed);

        let next = compute_monthly_stats(&[a], 1, today, UTC);
        assert_eq!(next[0].day, d(2026, 2, 1));
        assert!(next.iter().all(|s| s.status == DayStatus::Future));
    }

    #[test]
    fn extreme_offsets_do_not_panic() {
        let today = d(2026, 10, 19);
        let far_future = compute_monthly_stats(&[], i32::MAX, today, UTC);
        assert!(!far_future.is_empty());
        assert!(far_future.iter().all(|s| s.status == DayStatus::Future));
        let far_past = compute_monthly_stats(&[habit_done_on(&[])], i32::MIN, today, UTC);
        assert!(!far_past.is_empty());
        assert!(far_past.iter().all(|s| s.status == DayStatus::Missed));
    }

    #[test]
    fn month_names_by_locale() {
        assert_eq!(MonthNames::default().label(2026, 10), "October 2026");
        let es = MonthNames::from_locale(Some("es_ES")).unwrap();
        assert_eq!(es.label(2026, 10), "Octubre 2026");
        assert_eq!(es.weekday_headers()[0], "Lun");
        let de = MonthNames::from_locale(Some("de")).unwrap();
        assert_eq!(de.label(2026, 3), "März 2026");
        assert!(MonthNames::from_locale(Some("xx")).is_err());
        assert_eq!(
            MonthNames::from_locale(Some("")).unwrap().label(2026, 1),
            "January 2026"
        );
    }

    #[test]
    fn month_view_carries_label() {
        let view = month_view(&[], -10, d(2026, 10, 19), UTC, MonthNames::default());
        assert_eq!((view.year, view.month), (2025, 12));
        assert_eq!(view.label, "December 2025");
        assert_eq!(view.days.len(), 31);
    }

    #[test]
    fn summary_counts_statuses() {
        let today = d(2026, 10, 4);
        let a = habit_done_on(&[d(2026, 10, 1), d(2026, 10, 2)]);
        let b = habit_done_on(&[d(2026, 10, 1)]);
        let stats = compute_monthly_stats(&[a, b], 0, today, UTC);
        let summary = MonthSummary::from_days(&stats);

        assert_eq!(summary.completed, 1);
        assert_eq!(summary.partial, 1);
        assert_eq!(summary.missed, 2);
        assert_eq!(summary.future, 27);
        assert_eq!(summary.empty, 0);
        assert_eq!(summary.average_ratio, Some(1.5 / 4.0));
    }

    #[test]
    fn summary_without_tracked_days_has_no_average() {
        let stats = compute_monthly_stats(&[], 0, d(2026, 10, 19), UTC);
        let summary = MonthSummary::from_days(&stats);
        assert_eq!(summary.empty, 19);
        assert_eq!(summary.future, 12);
        assert_eq!(summary.average_ratio, None);
    }
}
