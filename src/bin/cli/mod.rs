//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution
//! - output: console display of progress and summaries

pub mod args;
pub mod commands;
pub mod output;

pub use args::*;
pub use commands::*;
