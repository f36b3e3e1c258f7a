//! Core domain logic for the study tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: validated study/coding activity records
//! - Aggregation: daily/weekly rollups, category distribution, streaks
//! - Heatmap: the 365-day contribution grid
//! - Practice: the curated question feed and completion set
//! - Timer: the persisted coding-session stopwatch
//!
//! All aggregation is pure and clock-free. The day-key convention is a
//! plain calendar date: entries carry a `NaiveDate`, and callers supply
//! "today" (the local calendar date) to any function that needs an anchor,
//! so the same convention applies everywhere entries are bucketed.

pub mod aggregate;
pub mod entry;
pub mod heatmap;
pub mod practice;
pub mod timer;

pub use aggregate::{
    CategoryCount, DashboardStats, DayBucket, StreakState, WeekBucket, category_distribution,
    daily_problems, daily_time, dashboard_stats, streaks, weekly_progress,
};
pub use entry::{Category, Entry, EntryDraft, EntryPatch, ValidationError};
pub use heatmap::{HeatLevel, Heatmap, HeatmapCell, MonthLabel, activity_score, heatmap};
pub use practice::{BATCH_SIZE, CompletedSet, Difficulty, Question, catalog, next_batch};
pub use timer::{SavedSession, TimerState, format_hms};
