//! Report command: analytics rollups over the entry history.

use std::io::Write;

use anyhow::Result;
use dt_core::{
    CategoryCount, DayBucket, Entry, WeekBucket, category_distribution, daily_problems,
    daily_time, weekly_progress,
};
use serde::Serialize;

/// Computed report data, also the JSON output shape.
#[derive(Debug, Serialize)]
pub struct Report {
    pub daily_problems: Vec<DayBucket>,
    pub daily_time: Vec<DayBucket>,
    pub weekly_progress: Vec<WeekBucket>,
    pub categories: Vec<CategoryCount>,
}

/// Builds the report from an entry list. Pure; safe on empty input.
#[must_use]
pub fn build_report(entries: &[Entry]) -> Report {
    Report {
        daily_problems: daily_problems(entries),
        daily_time: daily_time(entries),
        weekly_progress: weekly_progress(entries),
        categories: category_distribution(entries),
    }
}

pub fn run<W: Write>(writer: &mut W, entries: &[Entry], json: bool) -> Result<()> {
    let report = build_report(entries);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(writer, "No entries yet. Add one to see analytics.")?;
        return Ok(());
    }

    writeln!(writer, "Daily problems (last 14 active days):")?;
    for bucket in &report.daily_problems {
        writeln!(writer, "  {}  {}", bucket.date, bucket.problems)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Daily hours (last 14 active days):")?;
    for bucket in &report.daily_time {
        writeln!(writer, "  {}  {}h", bucket.date, bucket.hours)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Weekly progress (last 8 weeks, starting Sunday):")?;
    for week in &report.weekly_progress {
        writeln!(
            writer,
            "  {}  {} problems  {}h",
            week.week_start, week.problems, week.hours
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "Category distribution:")?;
    for count in &report.categories {
        writeln!(writer, "  {}: {}", count.category, count.entries)?;
    }

    Ok(())
}
