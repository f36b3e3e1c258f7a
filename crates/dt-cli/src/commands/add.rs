//! Add command for logging a new entry.

use std::io::Write;

use anyhow::{Context, Result};
use dt_core::EntryDraft;
use dt_db::Database;

pub fn run<W: Write>(writer: &mut W, db: &mut Database, draft: &EntryDraft) -> Result<()> {
    let entry = db.create_entry(draft).context("failed to create entry")?;
    writeln!(
        writer,
        "Logged \"{}\" ({}, {} min, {} problems) on {}",
        entry.title, entry.category, entry.time_spent_min, entry.problems_solved, entry.date
    )?;
    writeln!(writer, "id: {}", entry.id)?;
    Ok(())
}
