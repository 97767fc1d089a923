use crate::core::error::Result;
use crate::core::status::Status;
use crate::format::StatusFormatter;
use std::io::Write;

/// Writes the status as indented JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl StatusFormatter for JsonFormatter {
    fn format(&self, w: &mut dyn Write, st: &Status) -> Result<()> {
        serde_json::to_writer_pretty(&mut *w, st)?;
        writeln!(w)?;
        Ok(())
    }
}
