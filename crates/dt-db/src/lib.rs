//! Storage layer for the study tracker.
//!
//! Provides persistence for entries and client-local app state using
//! `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but
//! not `Sync`. A `Database` instance can be moved between threads but cannot
//! be shared without external synchronization. The CLI is single-threaded,
//! so no locking is needed here.
//!
//! # Schema
//!
//! Entry dates are stored as TEXT in `YYYY-MM-DD` form, so lexicographic
//! ordering matches chronological ordering. Creation timestamps are TEXT in
//! RFC 3339 UTC. The `app_state` table is a plain key/value store for
//! client-local persisted state (timer, completed practice questions);
//! values are opaque strings to this crate, a missing key is not an error.

use std::path::Path;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;
use uuid::Uuid;

use dt_core::entry::{Category, Entry, EntryDraft, EntryPatch, ValidationError};

/// Storage errors.
///
/// `NotFound` is distinct from generic failure so callers can report a
/// missing id differently from an unavailable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The referenced entry id does not exist.
    #[error("entry not found: {id}")]
    NotFound { id: String },
    /// The written fields failed shape validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A stored row holds a value that no longer parses.
    #[error("invalid stored {field} for entry {id}: {value}")]
    FieldParse {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// An entries row before field parsing.
struct EntryRow {
    id: String,
    title: String,
    category: String,
    time_spent_min: u32,
    problems_solved: u32,
    notes: Option<String>,
    date: String,
    created_at: String,
}

impl EntryRow {
    fn into_entry(self) -> Result<Entry, StoreError> {
        let category: Category =
            self.category
                .parse()
                .map_err(|_| StoreError::FieldParse {
                    id: self.id.clone(),
                    field: "category",
                    value: self.category.clone(),
                })?;
        let date: NaiveDate = self.date.parse().map_err(|_| StoreError::FieldParse {
            id: self.id.clone(),
            field: "date",
            value: self.date.clone(),
        })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| StoreError::FieldParse {
                id: self.id.clone(),
                field: "created_at",
                value: self.created_at.clone(),
            })?;
        Ok(Entry {
            id: self.id,
            title: self.title,
            category,
            time_spent_min: self.time_spent_min,
            problems_solved: self.problems_solved,
            notes: self.notes,
            date,
            created_at,
        })
    }
}

const ENTRY_COLUMNS: &str =
    "id, title, category, time_spent_min, problems_solved, notes, date, created_at";

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EntryRow> {
    Ok(EntryRow {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        time_spent_min: row.get(3)?,
        problems_solved: row.get(4)?,
        notes: row.get(5)?,
        date: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection
    /// closes.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema. Idempotent.
    fn init(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS entries (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                category TEXT NOT NULL,
                time_spent_min INTEGER NOT NULL,
                problems_solved INTEGER NOT NULL DEFAULT 0,
                notes TEXT,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
            CREATE INDEX IF NOT EXISTS idx_entries_category ON entries(category);

            CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Creates a new entry from a validated draft, assigning its id and
    /// creation timestamp.
    pub fn create_entry(&mut self, draft: &EntryDraft) -> Result<Entry, StoreError> {
        draft.validate()?;
        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            category: draft.category,
            time_spent_min: draft.time_spent_min,
            problems_solved: draft.problems_solved,
            notes: draft.notes.clone(),
            date: draft.date,
            created_at: Utc::now(),
        };
        self.conn.execute(
            "
            INSERT INTO entries (id, title, category, time_spent_min, problems_solved, notes, date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
            params![
                entry.id,
                entry.title,
                entry.category.as_str(),
                entry.time_spent_min,
                entry.problems_solved,
                entry.notes,
                entry.date.to_string(),
                format_timestamp(entry.created_at),
            ],
        )?;
        tracing::debug!(id = %entry.id, date = %entry.date, "entry created");
        Ok(entry)
    }

    /// Lists all entries, most recent date first (then most recently
    /// created). Aggregation re-sorts as needed.
    pub fn list_entries(&self) -> Result<Vec<Entry>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY date DESC, created_at DESC"
        ))?;
        let rows = stmt.query_map([], read_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.into_entry()?);
        }
        Ok(entries)
    }

    /// Fetches a single entry by id.
    pub fn get_entry(&self, id: &str) -> Result<Entry, StoreError> {
        let row = self
            .conn
            .prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?"
            ))?
            .query_row([id], read_row)
            .optional()?;
        row.map_or_else(
            || Err(StoreError::NotFound { id: id.to_string() }),
            EntryRow::into_entry,
        )
    }

    /// Applies a partial update to an entry.
    ///
    /// The merged record is re-validated before anything is written, so a
    /// failed update leaves the stored row unchanged.
    pub fn update_entry(&mut self, id: &str, patch: &EntryPatch) -> Result<Entry, StoreError> {
        let existing = self.get_entry(id)?;
        let merged = patch.apply(&existing.draft());
        merged.validate()?;
        let entry = Entry {
            id: existing.id,
            title: merged.title.trim().to_string(),
            category: merged.category,
            time_spent_min: merged.time_spent_min,
            problems_solved: merged.problems_solved,
            notes: merged.notes,
            date: merged.date,
            created_at: existing.created_at,
        };
        self.conn.execute(
            "
            UPDATE entries
            SET title = ?, category = ?, time_spent_min = ?, problems_solved = ?, notes = ?, date = ?
            WHERE id = ?
            ",
            params![
                entry.title,
                entry.category.as_str(),
                entry.time_spent_min,
                entry.problems_solved,
                entry.notes,
                entry.date.to_string(),
                entry.id,
            ],
        )?;
        tracing::debug!(id = %entry.id, "entry updated");
        Ok(entry)
    }

    /// Deletes an entry by id.
    pub fn delete_entry(&mut self, id: &str) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?", [id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        tracing::debug!(id, "entry deleted");
        Ok(())
    }

    /// Deletes every entry, returning how many were removed.
    pub fn delete_all_entries(&mut self) -> Result<usize, StoreError> {
        let deleted = self.conn.execute("DELETE FROM entries", [])?;
        tracing::info!(deleted, "all entries deleted");
        Ok(deleted)
    }

    /// Reads a client-local state value. A missing key is `None`, not an
    /// error.
    pub fn get_state(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM app_state WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes a client-local state value, replacing any previous one.
    pub fn put_state(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "
            INSERT INTO app_state (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
            params![key, value],
        )?;
        Ok(())
    }

    /// Removes a client-local state value if present.
    pub fn clear_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM app_state WHERE key = ?", [key])?;
        Ok(())
    }
}
