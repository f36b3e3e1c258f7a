//! Reset command: wipes all entries and client-local state.

use std::io::Write;

use anyhow::Result;
use dt_db::Database;

use crate::state::{COMPLETED_KEY, TIMER_KEY};

pub fn run<W: Write>(writer: &mut W, db: &mut Database, confirmed: bool) -> Result<()> {
    if !confirmed {
        writeln!(
            writer,
            "This deletes every entry and all local state. Re-run with --yes to confirm."
        )?;
        return Ok(());
    }

    let deleted = db.delete_all_entries()?;
    db.clear_state(TIMER_KEY)?;
    db.clear_state(COMPLETED_KEY)?;
    writeln!(writer, "Deleted {deleted} entries. All data reset.")?;
    Ok(())
}
