//! Command implementations.
//!
//! Each command writes to a caller-supplied `Write` so tests can capture
//! output without touching stdout.

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod heatmap;
pub mod list;
pub mod practice;
pub mod report;
pub mod reset;
pub mod timer;
