//! Stdout output for CLI commands

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a pretty-printed JSON value to stdout
pub fn write_json(value: &Value) -> CliResult<()> {
    write_json_to(value, &mut io::stdout().lock())
}

fn write_json_to<W: Write>(value: &Value, writer: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
