//! Timer command: the persisted coding-session stopwatch.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use dt_core::{Category, EntryDraft, format_hms};
use dt_db::Database;

use crate::TimerAction;
use crate::state::{clear_timer, load_timer, store_timer};

pub fn run<W: Write>(
    writer: &mut W,
    db: &mut Database,
    action: &TimerAction,
    now_ms: i64,
    today: NaiveDate,
) -> Result<()> {
    let mut timer = load_timer(db)?;

    match action {
        TimerAction::Start => {
            if timer.running {
                writeln!(writer, "Timer already running.")?;
                return Ok(());
            }
            let resumed = !timer.is_idle();
            timer.start(now_ms);
            store_timer(db, &timer)?;
            writeln!(
                writer,
                "{} at {}",
                if resumed { "Resumed" } else { "Started" },
                format_hms(timer.elapsed_at(now_ms))
            )?;
        }
        TimerAction::Pause => {
            if !timer.running {
                writeln!(writer, "Timer is not running.")?;
                return Ok(());
            }
            timer.pause(now_ms);
            store_timer(db, &timer)?;
            writeln!(writer, "Paused at {}", format_hms(timer.elapsed_secs))?;
        }
        TimerAction::Status => {
            let state = if timer.running {
                "running"
            } else if timer.is_idle() {
                "idle"
            } else {
                "paused"
            };
            writeln!(
                writer,
                "{} ({state})",
                format_hms(timer.elapsed_at(now_ms))
            )?;
        }
        TimerAction::Save => {
            if timer.running {
                writeln!(writer, "Timer is running; pause it before saving.")?;
                return Ok(());
            }
            let Some(session) = timer.take_session(now_ms) else {
                writeln!(writer, "Nothing to save.")?;
                return Ok(());
            };
            let entry = db.create_entry(&EntryDraft {
                title: "Coding Session".to_string(),
                category: Category::Dsa,
                time_spent_min: session.minutes,
                problems_solved: 0,
                notes: Some(format!("Timer session: {}", format_hms(session.elapsed_secs))),
                date: today,
            })?;
            clear_timer(db)?;
            writeln!(
                writer,
                "Saved {} session as entry {}",
                format_hms(session.elapsed_secs),
                entry.id
            )?;
        }
        TimerAction::Reset => {
            timer.reset();
            clear_timer(db)?;
            writeln!(writer, "Timer reset.")?;
        }
    }
    Ok(())
}
