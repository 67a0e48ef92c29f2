//! Configuration module for spendview
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendviewPaths;
pub use settings::{Settings, TimeBasis};
