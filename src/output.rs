//! Rendering results in the `sqlite3` list format.
//!
//! One row per line, fields joined by a separator (`|` unless configured otherwise), `NULL` as
//! the empty string and no header. Scripts that used to parse the output of `sqlite3` keep
//! working unchanged.

use crate::field::Row;
use crate::store::QueryResult;
use std::io::{self, Write};

/// The separator `sqlite3` uses by default.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Write rows, one per line.
pub fn write_rows<W>(out: &mut W, rows: &[Row], separator: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.write_all(separator.as_bytes())?;
            }
            out.write_all(&field.to_bytes())?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the result of an operation.
///
/// Rows are written as with [`write_rows`]. An update writes nothing.
pub fn write_result<W>(out: &mut W, result: &QueryResult, separator: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    match result {
        QueryResult::Rows(rows) => write_rows(out, rows, separator)?,
        QueryResult::RowsChanged(_) => {}
    }
    out.flush()
}
