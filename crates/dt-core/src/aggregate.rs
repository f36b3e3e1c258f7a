//! Activity aggregation: rollups, category distribution, and streaks.
//!
//! Every function here is pure and total over any entry slice, including the
//! empty one. Nothing reads a clock: callers pass `today` so results are
//! reproducible and the day-key convention (local calendar dates, see the
//! crate docs) is applied in exactly one place, the call site.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::entry::{Category, Entry};

/// Number of day buckets returned by the daily rollups.
pub const DAILY_WINDOW: usize = 14;

/// Number of week buckets returned by the weekly rollup.
pub const WEEKLY_WINDOW: usize = 8;

/// How far back the current-streak walk looks, in days.
pub const STREAK_LOOKBACK_DAYS: i64 = 366;

/// Aggregated activity for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub problems: u32,
    pub hours: f64,
}

/// Aggregated activity for one Sunday-anchored week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    /// The Sunday this week starts on.
    pub week_start: NaiveDate,
    pub problems: u32,
    pub hours: f64,
}

/// Entry count for one category. Absent categories are not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub entries: usize,
}

/// Current and best consecutive-day streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakState {
    pub current: u32,
    pub best: u32,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_problems: u32,
    pub total_hours: f64,
    pub total_entries: usize,
    pub streaks: StreakState,
}

/// Rounds to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts summed minutes to hours with one decimal.
fn minutes_to_hours(minutes: u32) -> f64 {
    round1(f64::from(minutes) / 60.0)
}

/// Returns the Sunday starting the week that contains `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Groups entries by date, summing problems and minutes. Ascending by date;
/// days with no entries do not appear.
fn daily_sums(entries: &[Entry]) -> BTreeMap<NaiveDate, (u32, u32)> {
    let mut sums: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for entry in entries {
        let (problems, minutes) = sums.entry(entry.date).or_default();
        *problems += entry.problems_solved;
        *minutes += entry.time_spent_min;
    }
    sums
}

/// Keeps the most recent `window` values of an ascending sequence.
fn tail<T>(mut buckets: Vec<T>, window: usize) -> Vec<T> {
    if buckets.len() > window {
        buckets.drain(..buckets.len() - window);
    }
    buckets
}

/// Problems solved per day, most recent 14 active days, ascending.
///
/// This is a windowing policy, not a calendar fill: gaps simply do not
/// appear as buckets.
#[must_use]
pub fn daily_problems(entries: &[Entry]) -> Vec<DayBucket> {
    tail(day_buckets(entries), DAILY_WINDOW)
}

/// Hours spent per day, most recent 14 active days, ascending.
#[must_use]
pub fn daily_time(entries: &[Entry]) -> Vec<DayBucket> {
    tail(day_buckets(entries), DAILY_WINDOW)
}

fn day_buckets(entries: &[Entry]) -> Vec<DayBucket> {
    daily_sums(entries)
        .into_iter()
        .map(|(date, (problems, minutes))| DayBucket {
            date,
            problems,
            hours: minutes_to_hours(minutes),
        })
        .collect()
}

/// Problems and hours per Sunday-anchored week, most recent 8, ascending.
#[must_use]
pub fn weekly_progress(entries: &[Entry]) -> Vec<WeekBucket> {
    let mut sums: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for entry in entries {
        let (problems, minutes) = sums.entry(week_start(entry.date)).or_default();
        *problems += entry.problems_solved;
        *minutes += entry.time_spent_min;
    }
    let buckets = sums
        .into_iter()
        .map(|(start, (problems, minutes))| WeekBucket {
            week_start: start,
            problems,
            hours: minutes_to_hours(minutes),
        })
        .collect();
    tail(buckets, WEEKLY_WINDOW)
}

/// Entry counts per category, in declaration order, omitting absent ones.
#[must_use]
pub fn category_distribution(entries: &[Entry]) -> Vec<CategoryCount> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let count = entries.iter().filter(|e| e.category == category).count();
            (count > 0).then_some(CategoryCount {
                category,
                entries: count,
            })
        })
        .collect()
}

/// Computes current and best streaks from the set of distinct active days.
///
/// The current streak walks backward from `today`; a missing "today" does
/// not break it (an entry yesterday still counts as an ongoing streak of 1),
/// but any later gap does. The best streak is the longest run of consecutive
/// active days anywhere in history, and an ongoing current streak can itself
/// be the best.
#[must_use]
pub fn streaks(entries: &[Entry], today: NaiveDate) -> StreakState {
    let days: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    if days.is_empty() {
        return StreakState::default();
    }

    let mut current = 0u32;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        if days.contains(&day) {
            current += 1;
        } else if offset > 0 {
            break;
        }
    }

    let mut sorted: Vec<NaiveDate> = days.into_iter().collect();
    sorted.sort_unstable();
    let mut best = 0u32;
    let mut run = 1u32;
    for pair in sorted.windows(2) {
        if pair[1] - pair[0] == Duration::days(1) {
            run += 1;
        } else {
            best = best.max(run);
            run = 1;
        }
    }
    best = best.max(run).max(current);

    StreakState { current, best }
}

/// Computes the dashboard headline numbers.
#[must_use]
pub fn dashboard_stats(entries: &[Entry], today: NaiveDate) -> DashboardStats {
    let total_problems = entries.iter().map(|e| e.problems_solved).sum();
    let total_minutes: u32 = entries.iter().map(|e| e.time_spent_min).sum();
    DashboardStats {
        total_problems,
        total_hours: minutes_to_hours(total_minutes),
        total_entries: entries.len(),
        streaks: streaks(entries, today),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::entry::{Category, Entry};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(d: &str, problems: u32, minutes: u32) -> Entry {
        Entry {
            id: format!("{d}-{problems}-{minutes}"),
            title: "Practice".to_string(),
            category: Category::Dsa,
            time_spent_min: minutes,
            problems_solved: problems,
            notes: None,
            date: date(d),
            created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn daily_problems_sums_per_day_and_skips_empty_days() {
        let entries = vec![
            entry("2025-06-01", 2, 30),
            entry("2025-06-01", 3, 60),
            entry("2025-06-03", 1, 0),
        ];
        let buckets = daily_problems(&entries);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date, date("2025-06-01"));
        assert_eq!(buckets[0].problems, 5);
        assert_eq!(buckets[1].date, date("2025-06-03"));
        assert_eq!(buckets[1].problems, 1);
    }

    #[test]
    fn daily_rollups_window_to_most_recent_14() {
        let entries: Vec<Entry> = (1..=20)
            .map(|day| entry(&format!("2025-06-{day:02}"), 1, 60))
            .collect();
        let buckets = daily_problems(&entries);
        assert_eq!(buckets.len(), DAILY_WINDOW);
        assert_eq!(buckets.first().unwrap().date, date("2025-06-07"));
        assert_eq!(buckets.last().unwrap().date, date("2025-06-20"));
        assert!(buckets.windows(2).all(|p| p[0].date < p[1].date));
    }

    #[test]
    fn daily_time_converts_minutes_to_rounded_hours() {
        let entries = vec![entry("2025-06-01", 0, 45), entry("2025-06-01", 0, 30)];
        let buckets = daily_time(&entries);
        assert_eq!(buckets.len(), 1);
        assert!((buckets[0].hours - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn weekly_progress_buckets_on_sundays() {
        // 2025-06-01 is a Sunday; 2025-06-07 Saturday; 2025-06-08 next Sunday
        let entries = vec![
            entry("2025-06-02", 2, 60),
            entry("2025-06-07", 1, 30),
            entry("2025-06-08", 4, 120),
        ];
        let weeks = weekly_progress(&entries);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, date("2025-06-01"));
        assert_eq!(weeks[0].problems, 3);
        assert!((weeks[0].hours - 1.5).abs() < f64::EPSILON);
        assert_eq!(weeks[1].week_start, date("2025-06-08"));
        assert_eq!(weeks[1].problems, 4);
    }

    #[test]
    fn weekly_progress_windows_to_8() {
        let entries: Vec<Entry> = (0..12)
            .map(|week| {
                let d = date("2025-01-05") + Duration::days(week * 7);
                entry(&d.to_string(), 1, 60)
            })
            .collect();
        let weeks = weekly_progress(&entries);
        assert_eq!(weeks.len(), WEEKLY_WINDOW);
        assert!(weeks.windows(2).all(|p| p[0].week_start < p[1].week_start));
    }

    #[test]
    fn category_distribution_omits_absent_categories() {
        let mut entries = vec![entry("2025-06-01", 1, 30), entry("2025-06-02", 1, 30)];
        entries[1].category = Category::Learning;
        let dist = category_distribution(&entries);
        assert_eq!(
            dist,
            vec![
                CategoryCount {
                    category: Category::Dsa,
                    entries: 1
                },
                CategoryCount {
                    category: Category::Learning,
                    entries: 1
                },
            ]
        );
    }

    #[test]
    fn streaks_of_empty_input_are_zero() {
        assert_eq!(streaks(&[], date("2025-06-10")), StreakState::default());
    }

    #[test]
    fn consecutive_today_and_yesterday_is_streak_of_2() {
        let entries = vec![entry("2025-06-10", 1, 30), entry("2025-06-09", 1, 30)];
        let s = streaks(&entries, date("2025-06-10"));
        assert_eq!(s.current, 2);
        assert_eq!(s.best, 2);
    }

    #[test]
    fn gap_resets_current_streak() {
        let entries = vec![entry("2025-06-10", 1, 30), entry("2025-06-07", 1, 30)];
        let s = streaks(&entries, date("2025-06-10"));
        assert_eq!(s.current, 1);
        assert_eq!(s.best, 1);
    }

    #[test]
    fn missing_today_does_not_break_streak() {
        let entries = vec![entry("2025-06-09", 1, 30), entry("2025-06-08", 1, 30)];
        let s = streaks(&entries, date("2025-06-10"));
        assert_eq!(s.current, 2);
    }

    #[test]
    fn streak_ended_two_days_ago_has_zero_current_and_best_of_run() {
        let entries: Vec<Entry> = (4..=8)
            .map(|day| entry(&format!("2025-06-{day:02}"), 1, 30))
            .collect();
        let s = streaks(&entries, date("2025-06-10"));
        assert_eq!(s.current, 0);
        assert_eq!(s.best, 5);
    }

    #[test]
    fn best_streak_tracks_longest_historic_run() {
        let mut entries: Vec<Entry> = (1..=4)
            .map(|day| entry(&format!("2025-05-{day:02}"), 1, 30))
            .collect();
        entries.push(entry("2025-06-10", 1, 30));
        let s = streaks(&entries, date("2025-06-10"));
        assert_eq!(s.current, 1);
        assert_eq!(s.best, 4);
    }

    #[test]
    fn dashboard_stats_totals() {
        let entries = vec![entry("2025-06-09", 2, 90), entry("2025-06-10", 3, 30)];
        let stats = dashboard_stats(&entries, date("2025-06-10"));
        assert_eq!(stats.total_problems, 5);
        assert!((stats.total_hours - 2.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.streaks.current, 2);
    }

    #[test]
    fn week_start_is_sunday() {
        assert_eq!(week_start(date("2025-06-04")), date("2025-06-01"));
        assert_eq!(week_start(date("2025-06-01")), date("2025-06-01"));
        assert_eq!(week_start(date("2025-06-07")), date("2025-06-01"));
    }
}
