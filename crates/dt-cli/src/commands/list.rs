//! List command for browsing entries.

use std::io::Write;

use anyhow::Result;
use dt_core::{Category, Entry};
use dt_db::Database;

pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    category: Option<Category>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut entries: Vec<Entry> = db.list_entries()?;
    if let Some(category) = category {
        entries.retain(|e| e.category == category);
    }
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(writer, "No entries.")?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(
            writer,
            "{}  {:<14}  {:>3}p  {:>4}m  {}",
            entry.date, entry.category, entry.problems_solved, entry.time_spent_min, entry.title
        )?;
        writeln!(writer, "    id: {}", entry.id)?;
        if let Some(notes) = &entry.notes {
            writeln!(writer, "    {notes}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use dt_core::EntryDraft;

    use super::*;

    fn seed(db: &mut Database, title: &str, category: Category, date: &str) {
        db.create_entry(&EntryDraft {
            title: title.to_string(),
            category,
            time_spent_min: 30,
            problems_solved: 1,
            notes: None,
            date: date.parse().unwrap(),
        })
        .unwrap();
    }

    #[test]
    fn list_shows_entries_most_recent_first() {
        let mut db = Database::open_in_memory().unwrap();
        seed(&mut db, "first", Category::Dsa, "2025-06-01");
        seed(&mut db, "second", Category::Learning, "2025-06-02");

        let mut output = Vec::new();
        run(&mut output, &db, None, None, false).unwrap();
        let output = String::from_utf8(output).unwrap();

        let first_pos = output.find("second").unwrap();
        let second_pos = output.find("first").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn list_filters_by_category_and_limits() {
        let mut db = Database::open_in_memory().unwrap();
        seed(&mut db, "dsa one", Category::Dsa, "2025-06-01");
        seed(&mut db, "dsa two", Category::Dsa, "2025-06-02");
        seed(&mut db, "reading", Category::Learning, "2025-06-03");

        let mut output = Vec::new();
        run(&mut output, &db, Some(Category::Dsa), Some(1), false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("dsa two"));
        assert!(!output.contains("dsa one"));
        assert!(!output.contains("reading"));
    }

    #[test]
    fn list_json_is_parseable() {
        let mut db = Database::open_in_memory().unwrap();
        seed(&mut db, "entry", Category::SystemDesign, "2025-06-01");

        let mut output = Vec::new();
        run(&mut output, &db, None, None, true).unwrap();

        let parsed: Vec<Entry> = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].category, Category::SystemDesign);
    }

    #[test]
    fn empty_store_prints_placeholder() {
        let db = Database::open_in_memory().unwrap();
        let mut output = Vec::new();
        run(&mut output, &db, None, None, false).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "No entries.\n");
    }
}
