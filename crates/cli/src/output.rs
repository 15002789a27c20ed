//! Writing command results to stdout

use crate::errors::CliError;
use std::io::Write;

/// Writes `text` to `writer` followed by a newline. Empty output writes nothing.
pub fn write_output(mut writer: impl Write, text: &str) -> Result<(), CliError> {
    if text.is_empty() {
        return Ok(());
    }
    writeln!(writer, "{text}")
        .and_then(|()| writer.flush())
        .map_err(|source| CliError::Output { source })
}

/// Writes `text` to stdout followed by a newline.
pub fn print_output(text: &str) -> Result<(), CliError> {
    write_output(std::io::stdout().lock(), text)
}
