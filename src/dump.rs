//! Dump query results as formatted ascii tables.
//!
//! Convenience wrappers over the source adapters and the renderer: one
//! string-returning, one sink-writing, and one stdout-printing form for
//! each of the two input shapes. The writing forms append a line
//! terminator after the table.
//!
//! An empty result renders as an ascii table with no cells.

use std::io::{self, Write};

use crate::error::Error;
use crate::source::{CursorSource, RecordListSource, RowCursor, Schema, TabularSource};

/// Render an open cursor's contents as an ascii table string.
///
/// The cursor is read to exhaustion but not closed; closing belongs to the
/// caller.
///
/// # Errors
///
/// Returns [`Error::DataAccess`] if reading or navigating the cursor fails.
pub fn cursor_to_string<C: RowCursor>(cursor: &mut C) -> Result<String, Error> {
    Ok(CursorSource::new(cursor).into_table()?.render())
}

/// Write an open cursor's contents as an ascii table, followed by a line
/// terminator, to `out`.
///
/// # Errors
///
/// Returns [`Error::DataAccess`] if reading the cursor fails, or
/// [`Error::Io`] if writing to `out` fails.
pub fn write_cursor<C: RowCursor, W: Write>(cursor: &mut C, out: &mut W) -> Result<(), Error> {
    let ascii = cursor_to_string(cursor)?;
    writeln!(out, "{ascii}")?;
    Ok(())
}

/// Print an open cursor's contents as an ascii table to standard output.
///
/// # Errors
///
/// Returns [`Error::DataAccess`] if reading the cursor fails, or
/// [`Error::Io`] if writing to stdout fails.
pub fn print_cursor<C: RowCursor>(cursor: &mut C) -> Result<(), Error> {
    write_cursor(cursor, &mut io::stdout())
}

/// Render a record list as an ascii table string, reading each record's
/// fields through `schema` in declared order.
///
/// # Errors
///
/// Returns [`Error::FieldAccess`] if a declared accessor fails on any
/// record.
pub fn records_to_string<T>(records: &[T], schema: &Schema<T>) -> Result<String, Error> {
    Ok(RecordListSource::new(records, schema).into_table()?.render())
}

/// Write a record list as an ascii table, followed by a line terminator,
/// to `out`.
///
/// # Errors
///
/// Returns [`Error::FieldAccess`] if a declared accessor fails, or
/// [`Error::Io`] if writing to `out` fails.
pub fn write_records<T, W: Write>(
    records: &[T],
    schema: &Schema<T>,
    out: &mut W,
) -> Result<(), Error> {
    let ascii = records_to_string(records, schema)?;
    writeln!(out, "{ascii}")?;
    Ok(())
}

/// Print a record list as an ascii table to standard output.
///
/// # Errors
///
/// Returns [`Error::FieldAccess`] if a declared accessor fails, or
/// [`Error::Io`] if writing to stdout fails.
pub fn print_records<T>(records: &[T], schema: &Schema<T>) -> Result<(), Error> {
    write_records(records, schema, &mut io::stdout())
}
