//! Client-local persisted state: timer and completed practice questions.
//!
//! Both live in the `app_state` table as JSON values. An unreadable value
//! degrades to the default state with a warning rather than failing the
//! command; a missing key simply means "not yet recorded".

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use dt_core::{CompletedSet, TimerState};
use dt_db::Database;
use serde::de::DeserializeOwned;

/// State key holding the persisted [`TimerState`].
pub const TIMER_KEY: &str = "timer";

/// State key holding the persisted [`CompletedSet`].
pub const COMPLETED_KEY: &str = "completed_questions";

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's local calendar date, the anchor for all aggregation.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn load_state<T: DeserializeOwned + Default>(db: &Database, key: &str) -> Result<T> {
    let Some(raw) = db.get_state(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(error) => {
            tracing::warn!(key, %error, "discarding unreadable persisted state");
            Ok(T::default())
        }
    }
}

pub fn load_timer(db: &Database) -> Result<TimerState> {
    load_state(db, TIMER_KEY)
}

pub fn store_timer(db: &mut Database, timer: &TimerState) -> Result<()> {
    db.put_state(TIMER_KEY, &serde_json::to_string(timer)?)?;
    Ok(())
}

pub fn clear_timer(db: &mut Database) -> Result<()> {
    db.clear_state(TIMER_KEY)?;
    Ok(())
}

pub fn load_completed(db: &Database) -> Result<CompletedSet> {
    load_state(db, COMPLETED_KEY)
}

pub fn store_completed(db: &mut Database, completed: &CompletedSet) -> Result<()> {
    db.put_state(COMPLETED_KEY, &serde_json::to_string(completed)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_as_defaults() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_timer(&db).unwrap(), TimerState::default());
        assert!(load_completed(&db).unwrap().is_empty());
    }

    #[test]
    fn timer_roundtrips_through_state_table() {
        let mut db = Database::open_in_memory().unwrap();
        let timer = TimerState {
            elapsed_secs: 42,
            started_at_ms: Some(1_000),
            running: true,
        };
        store_timer(&mut db, &timer).unwrap();
        assert_eq!(load_timer(&db).unwrap(), timer);

        clear_timer(&mut db).unwrap();
        assert_eq!(load_timer(&db).unwrap(), TimerState::default());
    }

    #[test]
    fn corrupt_state_degrades_to_default() {
        let mut db = Database::open_in_memory().unwrap();
        db.put_state(TIMER_KEY, "not json").unwrap();
        assert_eq!(load_timer(&db).unwrap(), TimerState::default());
    }

    #[test]
    fn completed_set_roundtrips() {
        let mut db = Database::open_in_memory().unwrap();
        let mut completed = CompletedSet::default();
        completed.insert(7);
        completed.insert(3);
        store_completed(&mut db, &completed).unwrap();
        assert_eq!(load_completed(&db).unwrap(), completed);
    }
}
