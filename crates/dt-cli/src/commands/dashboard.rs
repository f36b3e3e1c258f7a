//! Dashboard command: headline stats, streaks, and recent activity.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use dt_core::{Entry, dashboard_stats};
use rand::Rng;
use rand::seq::SliceRandom;

/// How many recent entries the dashboard lists.
const RECENT_ENTRIES: usize = 5;

/// Streak milestones with their motivational lines, lowest tier first.
const MOTIVATION_TIERS: [(u32, &[&str]); 6] = [
    (
        0,
        &[
            "Start your coding journey today!",
            "Every expert was once a beginner",
        ],
    ),
    (1, &["Great start! Keep it up!", "Consistency is key!"]),
    (3, &["You're on fire!", "Building momentum!"]),
    (7, &["Incredible streak!", "Unstoppable!"]),
    (
        14,
        &["Legendary! You're a machine!", "Two weeks strong!"],
    ),
    (
        30,
        &["30-day warrior! You're elite!", "Consistency beats talent!"],
    ),
];

/// Picks a motivational line for the streak: the tier is the highest
/// milestone reached (deterministic), the line within it is random.
fn motivation<R: Rng>(streak: u32, rng: &mut R) -> &'static str {
    let mut lines = MOTIVATION_TIERS[0].1;
    for (min, tier_lines) in MOTIVATION_TIERS {
        if streak >= min {
            lines = tier_lines;
        }
    }
    lines.choose(rng).copied().unwrap_or(lines[0])
}

pub fn run<W: Write, R: Rng>(
    writer: &mut W,
    entries: &[Entry],
    today: NaiveDate,
    rng: &mut R,
) -> Result<()> {
    let stats = dashboard_stats(entries, today);

    writeln!(writer, "Dashboard")?;
    writeln!(writer, "{}", motivation(stats.streaks.current, rng))?;
    writeln!(writer)?;
    writeln!(writer, "Problems solved: {}", stats.total_problems)?;
    writeln!(writer, "Study hours:     {}", stats.total_hours)?;
    writeln!(writer, "Total sessions:  {}", stats.total_entries)?;
    writeln!(writer, "Current streak:  {}d", stats.streaks.current)?;
    writeln!(writer, "Best streak:     {}d", stats.streaks.best)?;

    writeln!(writer)?;
    writeln!(writer, "Recent activity:")?;
    if entries.is_empty() {
        writeln!(writer, "  No activity yet. Start your journey!")?;
        return Ok(());
    }
    for entry in entries.iter().take(RECENT_ENTRIES) {
        writeln!(
            writer,
            "  {}  {:<14}  {:>3}p  {:>4}m  {}",
            entry.date, entry.category, entry.problems_solved, entry.time_spent_min, entry.title
        )?;
    }
    Ok(())
}
