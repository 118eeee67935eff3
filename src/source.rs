//! Tabular sources - normalizing query results into [`Table`] values.
//!
//! Two input shapes are supported, each behind the same capability trait:
//!
//! - [`CursorSource`] reads a forward-only [`RowCursor`] (column metadata
//!   once, then rows until exhaustion).
//! - [`RecordListSource`] reads a materialized record list through a
//!   [`Schema`] — an ordered list of (name, accessor) pairs declared by the
//!   caller, read in that fixed order for every record.
//!
//! The renderer depends only on the resulting [`Table`]; it never sees the
//! source shape.
//!
//! # Examples
//!
//! ```
//! use rowgrid::source::{RecordListSource, Schema, TabularSource};
//! use rowgrid::value::Value;
//!
//! struct Fruit {
//!     name: String,
//!     price: f64,
//! }
//!
//! let schema = Schema::new()
//!     .field("name", |fruit: &Fruit| Value::from(fruit.name.as_str()))
//!     .field("price", |fruit: &Fruit| Value::from(fruit.price));
//!
//! let fruits = vec![Fruit { name: "Banana".into(), price: 1.5 }];
//! let table = RecordListSource::new(&fruits, &schema).into_table().unwrap();
//! assert_eq!(table.column_count(), 2);
//! assert_eq!(table.row_count(), 1);
//! ```

use std::fmt;

use log::debug;

use crate::error::{AccessError, Error};
use crate::table::Table;
use crate::value::Value;

/// A forward-only, stateful handle over a query result.
///
/// This is the narrow interface a result-set cursor must expose: column
/// metadata, and one-row-at-a-time advancement. Column indices are
/// 0-based; adapters over 1-indexed drivers normalize. Opening and closing
/// the underlying cursor belongs to the caller — implementations of this
/// trait are borrowed, never consumed.
///
/// Failures are reported through [`AccessError`] and propagate to the
/// caller unmodified; cursors are not resumable, so nothing is retried.
pub trait RowCursor {
    /// Number of columns in the result.
    fn column_count(&mut self) -> Result<usize, AccessError>;

    /// Display name of the column at `index` (0-based).
    fn column_name(&mut self, index: usize) -> Result<String, AccessError>;

    /// Advance to the next row and return its values, one per column.
    ///
    /// Returns `None` once the cursor is exhausted.
    fn next_row(&mut self) -> Result<Option<Vec<Value>>, AccessError>;
}

/// Anything that can be normalized into a [`Table`].
pub trait TabularSource {
    /// Extract the full table. Consumes the source; the conversion is a
    /// one-shot read.
    fn into_table(self) -> Result<Table, Error>;
}

/// Adapts an open, positioned-before-first-row cursor.
pub struct CursorSource<'a, C: RowCursor> {
    cursor: &'a mut C,
}

impl<'a, C: RowCursor> CursorSource<'a, C> {
    /// Borrow `cursor` for extraction. The cursor is not closed afterwards.
    pub fn new(cursor: &'a mut C) -> Self {
        Self { cursor }
    }
}

impl<C: RowCursor> TabularSource for CursorSource<'_, C> {
    fn into_table(self) -> Result<Table, Error> {
        let count = self.cursor.column_count().map_err(Error::DataAccess)?;

        let mut headers = Vec::with_capacity(count);
        for index in 0..count {
            headers.push(self.cursor.column_name(index).map_err(Error::DataAccess)?);
        }

        let mut rows = Vec::new();
        while let Some(row) = self.cursor.next_row().map_err(Error::DataAccess)? {
            rows.push(row);
        }

        debug!("cursor yielded {} rows across {count} columns", rows.len());
        Ok(Table::new(headers, rows))
    }
}

type ReadFn<T> = Box<dyn Fn(&T) -> Result<Value, AccessError>>;

struct Field<T> {
    name: String,
    read: ReadFn<T>,
}

/// Ordered (name, accessor) pairs describing how to read one record type.
///
/// The schema is declared once and reused for every record in a list,
/// replacing runtime field discovery with an explicit accessor list. Field
/// order is declaration order and becomes the table's column order.
pub struct Schema<T> {
    fields: Vec<Field<T>>,
}

impl<T> Schema<T> {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a field read by an infallible accessor.
    #[must_use]
    pub fn field(
        self,
        name: impl Into<String>,
        read: impl Fn(&T) -> Value + 'static,
    ) -> Self {
        self.try_field(name, move |record| Ok(read(record)))
    }

    /// Declare a field read by a fallible accessor.
    ///
    /// An accessor error on any record aborts the whole extraction with
    /// [`Error::FieldAccess`].
    #[must_use]
    pub fn try_field(
        mut self,
        name: impl Into<String>,
        read: impl Fn(&T) -> Result<Value, AccessError> + 'static,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            read: Box::new(read),
        });
        self
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Read every declared field of `record`, in declaration order.
    fn read_row(&self, record: &T) -> Result<Vec<Value>, Error> {
        self.fields
            .iter()
            .map(|field| {
                (field.read)(record).map_err(|source| Error::FieldAccess {
                    field: field.name.clone(),
                    source,
                })
            })
            .collect()
    }
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Adapts an ordered, fully materialized list of records.
pub struct RecordListSource<'a, T> {
    records: &'a [T],
    schema: &'a Schema<T>,
}

impl<'a, T> RecordListSource<'a, T> {
    /// Borrow `records` and the `schema` used to read them.
    pub fn new(records: &'a [T], schema: &'a Schema<T>) -> Self {
        Self { records, schema }
    }
}

impl<T> TabularSource for RecordListSource<'_, T> {
    fn into_table(self) -> Result<Table, Error> {
        // An empty result produces the empty table, not a header-only one.
        if self.records.is_empty() {
            debug!("record list empty, producing headerless table");
            return Ok(Table::new(Vec::new(), Vec::new()));
        }

        let headers: Vec<String> = self.schema.names().map(str::to_string).collect();
        let rows = self
            .records
            .iter()
            .map(|record| self.schema.read_row(record))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "record list yielded {} rows across {} columns",
            rows.len(),
            headers.len()
        );
        Ok(Table::new(headers, rows))
    }
}
