//! gitmux - Git working tree status in your tmux status bar.
//!
//! This library collects the status of a Git working tree and renders it as a
//! tmux style string. The rendering is driven by a configurable layout: a list
//! of feature names (branch, remote, flags, ...) and literal separators.
//!
//! # Public API
//! The [`core`] module provides:
//! - Status collection from a repository
//! - Configuration with embedded defaults
//! - Error handling and result types
//!
//! The [`format`] module provides the tmux and JSON formatters.

pub mod commands;
pub mod core;
pub mod format;

// Re-export the public API for external users
pub use core::{
    // Configuration
    Config,
    // Error handling
    GitmuxError,
    // Git operations
    GitRepo,
    Options,
    Result,
    State,
    // Status snapshot
    Status,
    Styles,
    Symbols,
    TmuxConfig,
};

pub use format::{
    json::JsonFormatter,
    layout::LayoutItem,
    tmux::{TmuxFormatter, RESET_STYLES},
    truncate::{truncate, TrimDirection},
    StatusFormatter,
};
