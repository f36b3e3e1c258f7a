//! Delete command for removing a single entry.

use std::io::Write;

use anyhow::Result;
use dt_db::{Database, StoreError};

pub fn run<W: Write>(writer: &mut W, db: &mut Database, id: &str) -> Result<()> {
    match db.delete_entry(id) {
        Ok(()) => {
            writeln!(writer, "Deleted entry {id}")?;
            Ok(())
        }
        Err(StoreError::NotFound { id }) => {
            writeln!(writer, "Entry not found: {id}")?;
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
