//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reporting engine.

pub mod expense;
pub mod export;

pub use expense::{handle_list_command, handle_stats_command, SourceArgs, ViewArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
