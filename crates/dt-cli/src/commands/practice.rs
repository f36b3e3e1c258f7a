//! Practice command: question suggestions and completion.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use dt_core::{Difficulty, catalog, next_batch, practice};
use dt_db::Database;
use rand::Rng;

use crate::state::{load_completed, store_completed};

pub fn next<W: Write, R: Rng>(
    writer: &mut W,
    db: &Database,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> Result<()> {
    let completed = load_completed(db)?;
    let batch = next_batch(catalog(), &completed, difficulty, rng);

    if batch.is_empty() {
        writeln!(writer, "Nothing left to practice at this filter. Well done!")?;
        return Ok(());
    }

    for question in batch {
        writeln!(
            writer,
            "#{:<3} [{}] {}",
            question.id, question.difficulty, question.title
        )?;
        writeln!(
            writer,
            "     {} · {}",
            question.topics.join(", "),
            question.url
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "Mark one done with: dt practice done <id>")?;
    Ok(())
}

pub fn done<W: Write>(writer: &mut W, db: &mut Database, id: u32, today: NaiveDate) -> Result<()> {
    let Some(question) = practice::find(id) else {
        bail!("unknown question id: {id}");
    };

    let mut completed = load_completed(db)?;
    if !completed.insert(id) {
        writeln!(writer, "#{id} is already completed.")?;
        return Ok(());
    }

    // Record the practice session first; only persist the completion once
    // the entry write succeeded.
    let entry = db.create_entry(&question.completion_draft(today))?;
    store_completed(db, &completed)?;

    writeln!(writer, "Completed #{id} {}", question.title)?;
    writeln!(writer, "Logged practice entry {}", entry.id)?;
    Ok(())
}
