//! Output formats for a [`Status`].
//!
//! - [`tmux::TmuxFormatter`]: layout driven tmux status string (the default)
//! - [`json::JsonFormatter`]: the raw status as JSON, for debugging

pub mod json;
pub mod layout;
pub mod tmux;
pub mod truncate;

use crate::core::error::Result;
use crate::core::status::Status;
use std::io::Write;

/// Writes a particular representation of a [`Status`].
pub trait StatusFormatter {
    fn format(&self, w: &mut dyn Write, st: &Status) -> Result<()>;
}
