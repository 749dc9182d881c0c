//! Report writers for `gridcols`.

use std::io::Write;

use serde::Serialize;

use crate::error::GridcolsError;

/// Writes `report` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error when serialisation or the write fails.
pub fn write_json<T: Serialize + ?Sized>(
    out: &mut impl Write,
    report: &T,
) -> Result<(), GridcolsError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Writes each entry on its own line.
///
/// # Errors
///
/// Returns an error when the write fails.
pub fn write_lines<S: AsRef<str>>(out: &mut impl Write, lines: &[S]) -> Result<(), GridcolsError> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
