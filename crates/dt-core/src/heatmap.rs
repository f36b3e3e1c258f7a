//! Contribution-style activity heatmap over a fixed 365-day window.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::entry::Entry;

/// Length of the heatmap window in days, ending today.
pub const WINDOW_DAYS: i64 = 365;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Activity score for a single entry: one unit per problem solved plus one
/// per started half hour of time spent.
#[must_use]
pub const fn activity_score(problems: u32, minutes: u32) -> u32 {
    problems + minutes / 30
}

/// Severity tier for a day's activity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    None,
    Light,
    Medium,
    High,
    Peak,
}

impl HeatLevel {
    /// Maps a score onto the five-tier palette (0, 1-2, 3-5, 6-10, >10).
    #[must_use]
    pub const fn for_score(score: u32) -> Self {
        match score {
            0 => Self::None,
            1..=2 => Self::Light,
            3..=5 => Self::Medium,
            6..=10 => Self::High,
            _ => Self::Peak,
        }
    }
}

/// One day-cell of the heatmap window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub score: u32,
    pub weekday: Weekday,
}

impl HeatmapCell {
    #[must_use]
    pub const fn level(&self) -> HeatLevel {
        HeatLevel::for_score(self.score)
    }
}

/// Marks the cell index at which a new month begins, for header annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub label: &'static str,
    pub index: usize,
}

/// A 365-day activity grid ending on `today`, oldest cell first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
}

impl Heatmap {
    /// Splits the window into week columns. A new column starts whenever a
    /// cell falls on Sunday and the current column is non-empty, so the
    /// first and last columns may be partial.
    #[must_use]
    pub fn weeks(&self) -> Vec<&[HeatmapCell]> {
        let mut columns = Vec::new();
        let mut start = 0;
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.weekday == Weekday::Sun && i > start {
                columns.push(&self.cells[start..i]);
                start = i;
            }
        }
        if start < self.cells.len() {
            columns.push(&self.cells[start..]);
        }
        columns
    }

    /// Month labels at the cell index where the month value changes.
    #[must_use]
    pub fn month_labels(&self) -> Vec<MonthLabel> {
        let mut labels = Vec::new();
        let mut last_month = 0;
        for (index, cell) in self.cells.iter().enumerate() {
            let month = cell.date.month();
            if month != last_month {
                labels.push(MonthLabel {
                    label: MONTHS[month as usize - 1],
                    index,
                });
                last_month = month;
            }
        }
        labels
    }
}

/// Builds the heatmap for the 365-day window ending on `today`.
///
/// Scores are summed per entry, so an entry with 2 problems over 65 minutes
/// contributes `2 + 65/30 = 4`. Days with no entries score 0 but still
/// occupy a cell; the window always has exactly 365 of them.
#[must_use]
pub fn heatmap(entries: &[Entry], today: NaiveDate) -> Heatmap {
    let mut scores: HashMap<NaiveDate, u32> = HashMap::new();
    for entry in entries {
        *scores.entry(entry.date).or_default() +=
            activity_score(entry.problems_solved, entry.time_spent_min);
    }

    let cells = (0..WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            HeatmapCell {
                date,
                score: scores.get(&date).copied().unwrap_or(0),
                weekday: date.weekday(),
            }
        })
        .collect();

    Heatmap { cells }
}
