//! Persisted stopwatch for coding sessions.
//!
//! The timer is wall-clock anchored: while running, the persisted state
//! carries the epoch time it started at, so elapsed time can be
//! reconstructed after a reload or process restart as
//! `elapsed_secs + (now - started_at)`.

use serde::{Deserialize, Serialize};

/// Persisted stopwatch state.
///
/// Idle is the zero value; Running has `running = true` with a start
/// anchor; Paused has accumulated seconds with `running = false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds accumulated up to the last pause.
    pub elapsed_secs: u64,
    /// Epoch milliseconds when the current run started, while running.
    pub started_at_ms: Option<i64>,
    pub running: bool,
}

/// A finished session ready to be recorded as an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedSession {
    /// Elapsed time rounded to whole minutes.
    pub minutes: u32,
    pub elapsed_secs: u64,
}

impl TimerState {
    /// True when the timer holds no time and is not running.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.elapsed_secs == 0 && !self.running
    }

    /// Total elapsed seconds as of `now_ms`, including the live run.
    #[must_use]
    pub fn elapsed_at(&self, now_ms: i64) -> u64 {
        match self.started_at_ms {
            Some(started) if self.running => {
                let live = (now_ms - started).max(0) / 1000;
                self.elapsed_secs + u64::try_from(live).unwrap_or(0)
            }
            _ => self.elapsed_secs,
        }
    }

    /// Starts or resumes the timer. A no-op while already running.
    pub fn start(&mut self, now_ms: i64) {
        if !self.running {
            self.started_at_ms = Some(now_ms);
            self.running = true;
        }
    }

    /// Pauses the timer, folding the live run into `elapsed_secs`.
    pub fn pause(&mut self, now_ms: i64) {
        if self.running {
            self.elapsed_secs = self.elapsed_at(now_ms);
            self.started_at_ms = None;
            self.running = false;
        }
    }

    /// Stops and clears all accumulated time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Takes the finished session out of the timer, resetting it to idle.
    ///
    /// Returns `None` (leaving the state untouched) while the timer is
    /// running or when less than one second has accumulated.
    pub fn take_session(&mut self, now_ms: i64) -> Option<SavedSession> {
        if self.running {
            return None;
        }
        let elapsed_secs = self.elapsed_at(now_ms);
        if elapsed_secs < 1 {
            return None;
        }
        self.reset();
        Some(SavedSession {
            minutes: u32::try_from((elapsed_secs + 30) / 60).unwrap_or(u32::MAX),
            elapsed_secs,
        })
    }
}

/// Formats seconds as `HH:MM:SS`.
#[must_use]
pub fn format_hms(secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
