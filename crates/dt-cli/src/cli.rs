//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use dt_core::{Category, Difficulty};

/// Personal study and coding-progress tracker.
///
/// Logs study entries and derives dashboards, analytics, streaks, a
/// contribution heatmap, and a curated practice-question feed.
#[derive(Debug, Parser)]
#[command(name = "dt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a new study entry.
    Add {
        /// Short description of the activity (max 60 characters).
        #[arg(long)]
        title: String,

        /// Activity category (dsa, development, system-design,
        /// interview-prep, learning).
        #[arg(long)]
        category: Category,

        /// Time spent in minutes.
        #[arg(long)]
        time: u32,

        /// Number of problems solved.
        #[arg(long, default_value_t = 0)]
        problems: u32,

        /// Free-form notes (max 1000 characters).
        #[arg(long)]
        notes: Option<String>,

        /// Calendar date of the activity (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List entries, most recent first.
    List {
        /// Only show entries in this category.
        #[arg(long)]
        category: Option<Category>,

        /// Limit the number of entries shown.
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing entry.
    Edit {
        /// The entry id.
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        category: Option<Category>,

        /// Time spent in minutes.
        #[arg(long)]
        time: Option<u32>,

        #[arg(long)]
        problems: Option<u32>,

        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,

        /// Remove the notes from the entry.
        #[arg(long)]
        clear_notes: bool,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete an entry.
    Delete {
        /// The entry id.
        id: String,
    },

    /// Show totals, streaks, and recent activity.
    Dashboard,

    /// Show analytics rollups (daily, weekly, per-category).
    Report {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render the 365-day activity heatmap.
    Heatmap,

    /// Practice-question feed.
    Practice {
        #[command(subcommand)]
        action: PracticeAction,
    },

    /// Coding-session stopwatch.
    Timer {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// Delete all entries and local state.
    Reset {
        /// Confirm the reset; refused otherwise.
        #[arg(long)]
        yes: bool,
    },
}

/// Practice feed actions.
#[derive(Debug, Subcommand)]
pub enum PracticeAction {
    /// Suggest the next batch of questions.
    Next {
        /// Only suggest questions of this difficulty.
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Mark a question complete and log a practice entry.
    Done {
        /// The question id.
        id: u32,
    },
}

/// Timer actions.
#[derive(Debug, Subcommand)]
pub enum TimerAction {
    /// Start or resume the timer.
    Start,
    /// Pause the timer.
    Pause,
    /// Show the current timer state.
    Status,
    /// Save the session as an entry and reset the timer.
    Save,
    /// Discard the session and reset the timer.
    Reset,
}
