//! # rowgrid
//!
//! Render database query results as bordered ascii tables.
//!
//! Two input shapes are supported — a forward-only cursor over a raw result
//! set, and a materialized list of records read through a declared field
//! schema — and both normalize into the same [`Table`](table::Table) value,
//! which renders as a fixed-width `+`/`-`/`|` bordered grid.
//!
//! ## Quick Start
//!
//! ```
//! use rowgrid::prelude::*;
//!
//! struct Fruit {
//!     id: i64,
//!     name: String,
//! }
//!
//! let fruits = vec![Fruit { id: 1, name: "Banana".into() }];
//! let schema = Schema::new()
//!     .field("id", |fruit: &Fruit| Value::from(fruit.id))
//!     .field("name", |fruit: &Fruit| Value::from(fruit.name.as_str()));
//!
//! let ascii = rowgrid::dump::records_to_string(&fruits, &schema).unwrap();
//! assert!(ascii.contains("Banana"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Value**: one scalar cell (null, bool, integer, float, or text)
//! - **Table**: the header + rows intermediate value
//! - **RowCursor**: the narrow trait a result-set cursor must expose
//! - **Schema**: ordered (name, accessor) pairs for reading record fields
//! - **TabularSource**: anything that can be normalized into a `Table`

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cells;
pub mod r#box;
pub mod value;
pub mod table;
pub mod error;
pub mod source;
pub mod dump;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::error::{AccessError, Error};
    pub use crate::r#box::BoxChars;
    pub use crate::source::{CursorSource, RecordListSource, RowCursor, Schema, TabularSource};
    pub use crate::table::{Align, Column, Table};
    pub use crate::value::Value;
}

// Re-export key types at crate root
pub use error::{AccessError, Error};
pub use source::{CursorSource, RecordListSource, RowCursor, Schema, TabularSource};
pub use table::{Align, Column, Table};
pub use value::Value;
