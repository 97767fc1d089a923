//! Core functionality for gitmux.
//!
//! This module provides the building blocks around the formatters: status
//! collection, configuration, error handling and diagnostics.

pub mod config;
pub mod duration;
pub mod error;
pub mod git;
pub mod output;
pub mod status;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitmuxError, Result};

// === Git operations ===
// Repository access and status collection
pub use git::GitRepo;

// === Status snapshot ===
// Immutable input of the formatters
pub use status::{State, Status};

// === Configuration ===
// Symbols, styles, layout and options of the tmux output
pub use config::{Config, Options, Styles, Symbols, TmuxConfig, DEFAULT_CONFIG};

// === Output formatting ===
// Diagnostics on stderr
pub use output::print_error;
