//! Study tracker CLI library.
//!
//! This crate provides the CLI interface for the study tracker.

mod cli;
pub mod commands;
mod config;
pub mod state;

pub use cli::{Cli, Commands, PracticeAction, TimerAction};
pub use config::Config;
