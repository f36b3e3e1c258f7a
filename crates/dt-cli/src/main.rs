use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use dt_core::{EntryDraft, EntryPatch};
use tracing_subscriber::EnvFilter;

use dt_cli::commands::{
    add, dashboard, delete, edit, heatmap, list, practice, report, reset, timer,
};
use dt_cli::state::{now_ms, today};
use dt_cli::{Cli, Commands, Config, PracticeAction};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<dt_db::Database> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    dt_db::Database::open(&config.database_path).context("failed to open database")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Add {
            title,
            category,
            time,
            problems,
            notes,
            date,
        }) => {
            let mut db = open_database(cli.config.as_deref())?;
            let draft = EntryDraft {
                title: title.clone(),
                category: *category,
                time_spent_min: *time,
                problems_solved: *problems,
                notes: notes.clone(),
                date: date.unwrap_or_else(today),
            };
            add::run(&mut stdout, &mut db, &draft)?;
        }
        Some(Commands::List {
            category,
            limit,
            json,
        }) => {
            let db = open_database(cli.config.as_deref())?;
            list::run(&mut stdout, &db, *category, *limit, *json)?;
        }
        Some(Commands::Edit {
            id,
            title,
            category,
            time,
            problems,
            notes,
            clear_notes,
            date,
        }) => {
            let mut db = open_database(cli.config.as_deref())?;
            let patch = EntryPatch {
                title: title.clone(),
                category: *category,
                time_spent_min: *time,
                problems_solved: *problems,
                notes: if *clear_notes {
                    Some(None)
                } else {
                    notes.clone().map(Some)
                },
                date: *date,
            };
            edit::run(&mut stdout, &mut db, id, &patch)?;
        }
        Some(Commands::Delete { id }) => {
            let mut db = open_database(cli.config.as_deref())?;
            delete::run(&mut stdout, &mut db, id)?;
        }
        Some(Commands::Dashboard) => {
            let db = open_database(cli.config.as_deref())?;
            let entries = db.list_entries()?;
            dashboard::run(&mut stdout, &entries, today(), &mut rand::thread_rng())?;
        }
        Some(Commands::Report { json }) => {
            let db = open_database(cli.config.as_deref())?;
            let entries = db.list_entries()?;
            report::run(&mut stdout, &entries, *json)?;
        }
        Some(Commands::Heatmap) => {
            let db = open_database(cli.config.as_deref())?;
            let entries = db.list_entries()?;
            heatmap::run(&mut stdout, &entries, today())?;
        }
        Some(Commands::Practice { action }) => {
            let mut db = open_database(cli.config.as_deref())?;
            match action {
                PracticeAction::Next { difficulty } => {
                    practice::next(&mut stdout, &db, *difficulty, &mut rand::thread_rng())?;
                }
                PracticeAction::Done { id } => {
                    practice::done(&mut stdout, &mut db, *id, today())?;
                }
            }
        }
        Some(Commands::Timer { action }) => {
            let mut db = open_database(cli.config.as_deref())?;
            timer::run(&mut stdout, &mut db, action, now_ms(), today())?;
        }
        Some(Commands::Reset { yes }) => {
            let mut db = open_database(cli.config.as_deref())?;
            reset::run(&mut stdout, &mut db, *yes)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
