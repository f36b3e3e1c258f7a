//! Edit command for updating an existing entry.

use std::io::Write;

use anyhow::Result;
use dt_core::EntryPatch;
use dt_db::{Database, StoreError};

pub fn run<W: Write>(writer: &mut W, db: &mut Database, id: &str, patch: &EntryPatch) -> Result<()> {
    if patch.is_empty() {
        writeln!(writer, "Nothing to change.")?;
        return Ok(());
    }
    match db.update_entry(id, patch) {
        Ok(entry) => {
            writeln!(
                writer,
                "Updated \"{}\" ({}, {} min, {} problems) on {}",
                entry.title, entry.category, entry.time_spent_min, entry.problems_solved, entry.date
            )?;
            Ok(())
        }
        Err(StoreError::NotFound { id }) => {
            writeln!(writer, "Entry not found: {id}")?;
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use dt_core::{Category, EntryDraft};

    use super::*;

    fn seed(db: &mut Database) -> String {
        db.create_entry(&EntryDraft {
            title: "Session".to_string(),
            category: Category::Dsa,
            time_spent_min: 30,
            problems_solved: 1,
            notes: None,
            date: "2025-06-01".parse().unwrap(),
        })
        .unwrap()
        .id
    }

    #[test]
    fn edit_applies_patch() {
        let mut db = Database::open_in_memory().unwrap();
        let id = seed(&mut db);

        let patch = EntryPatch {
            problems_solved: Some(5),
            ..EntryPatch::default()
        };
        let mut output = Vec::new();
        run(&mut output, &mut db, &id, &patch).unwrap();

        assert!(String::from_utf8(output).unwrap().contains("Updated"));
        assert_eq!(db.get_entry(&id).unwrap().problems_solved, 5);
    }

    #[test]
    fn edit_unknown_id_reports_not_found() {
        let mut db = Database::open_in_memory().unwrap();
        let patch = EntryPatch {
            problems_solved: Some(5),
            ..EntryPatch::default()
        };
        let mut output = Vec::new();
        run(&mut output, &mut db, "missing", &patch).unwrap();
        assert!(
            String::from_utf8(output)
                .unwrap()
                .contains("Entry not found: missing")
        );
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut db = Database::open_in_memory().unwrap();
        let id = seed(&mut db);

        let mut output = Vec::new();
        run(&mut output, &mut db, &id, &EntryPatch::default()).unwrap();

        assert!(
            String::from_utf8(output)
                .unwrap()
                .contains("Nothing to change")
        );
        assert_eq!(db.get_entry(&id).unwrap().problems_solved, 1);
    }
}
