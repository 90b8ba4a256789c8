//! Sortable data tables for tabula
//!
//! This crate turns a declarative column configuration into rendered tables
//! with click-to-sort headers:
//!
//! - **Columns**: label, derived attribute, optional sorting (by field or by a
//!   custom strategy), optional default sort and value formatter
//! - **Sort state**: which column is active and in which direction, derived
//!   from the column defaults and updated by toggling a column
//! - **Rendering**: a pure function from columns, rows and sort state to
//!   header and body cells, plus HTML themes
//! - **Table**: a stateful component tying the above to a query adapter
//!
//! # Architecture
//!
//! ```text
//! ColumnSet ──> SortState::initial ──> Table::init ──> QueryAdapter (count, fetch)
//!                     ^                     │
//!                     │                     v
//!            Table::sort_by(key)       render() ──> Theme ──> HTML
//! ```
//!
//! # Example
//!
//! ```rust
//! use tabula_core::{CellValue, Record, SortDirection};
//! use tabula_query::MemoryAdapter;
//! use tabula_tables::{Column, ColumnSet, Table};
//!
//! #[derive(Debug, Clone)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl Record for User {
//!     fn fields() -> &'static [&'static str] {
//!         &["id", "name"]
//!     }
//!
//!     fn value(&self, field: &str) -> Option<CellValue> {
//!         match field {
//!             "id" => Some(self.id.into()),
//!             "name" => Some(self.name.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # tokio_test_block(async {
//! let columns = ColumnSet::builder()
//!     .column(Column::new("Id"))
//!     .column(Column::new("Name").sort_by_default(SortDirection::Ascending))
//!     .build()
//!     .unwrap();
//!
//! let adapter = MemoryAdapter::new(vec![
//!     User { id: 1, name: "Bob".to_string() },
//!     User { id: 2, name: "Alice".to_string() },
//! ]);
//!
//! let mut table = Table::new(columns, adapter);
//! table.init().await.unwrap();
//! assert_eq!(table.rows()[0].name, "Alice");
//!
//! table.sort_by("name").await.unwrap();
//! assert_eq!(table.rows()[0].name, "Bob");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod column_set;
pub mod error;
pub mod query;
pub mod render;
pub mod sort_state;
pub mod table;
pub mod theme;

// Re-exports for convenience
pub use column::{Column, Formatter};
pub use column_set::{ColumnSet, ColumnSetBuilder};
pub use error::{Result, TableError};
pub use query::apply_sort;
pub use render::{
	BodyCell, HeaderCell, PageInfo, RenderedTable, SortControl, SortStatus, render, sort_control,
};
pub use sort_state::SortState;
pub use table::Table;
pub use theme::{Bootstrap5, PaginationClasses, Plain, Theme, theme_for};
