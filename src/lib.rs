//! # Tabula
//!
//! Declarative, sortable data tables rendered on the server.
//!
//! A table is configured once as an ordered set of columns. Each column has a
//! label, an attribute derived from it, and optionally a sort (by attribute or
//! by a custom strategy), a default sort and a formatter. At runtime a table
//! holds one sort state, asks a query adapter for the ordered page, and renders
//! header cells with sort links plus one body cell per column and row.
//!
//! ## Crates
//!
//! - [`core`]: sort direction, cell values and the `Record` trait
//! - [`conf`]: table settings and layered configuration sources
//! - [`query`]: query adapters (in-memory, SQL) and pagination
//! - [`tables`]: columns, sort state, rendering, themes and the `Table`
//!   component
//!
//! ## Feature Flags
//!
//! - `sql` (default) - SQL query adapter built on `sea-query`
//!
//! ## Quick Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct Book {
//!     title: String,
//!     year: i64,
//! }
//!
//! impl Record for Book {
//!     fn fields() -> &'static [&'static str] {
//!         &["title", "year"]
//!     }
//!
//!     fn value(&self, field: &str) -> Option<CellValue> {
//!         match field {
//!             "title" => Some(self.title.as_str().into()),
//!             "year" => Some(self.year.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let columns = ColumnSet::builder()
//!     .column(Column::new("Title").sortable())
//!     .column(Column::new("Year").sort_by_default(SortDirection::Descending))
//!     .build()?;
//!
//! let books = vec![
//!     Book { title: "Dune".to_string(), year: 1965 },
//!     Book { title: "Hyperion".to_string(), year: 1989 },
//! ];
//!
//! let mut table = Table::new(columns, MemoryAdapter::new(books));
//! table.init().await?;
//! let html = table.render_html();
//! assert!(html.find("Hyperion") < html.find("Dune"));
//! # Ok::<(), TableError>(())
//! # }).unwrap();
//! ```

#![warn(missing_docs)]

pub mod conf;
pub mod core;
pub mod query;
pub mod tables;

// Re-export the types most tables need
pub use tabula_conf::{SettingsError, TableSettings, ThemeKind};
pub use tabula_core::{CellValue, Record, SortDirection};
pub use tabula_query::{MemoryAdapter, MemoryQuery, Pagination, QueryAdapter, QueryError};
pub use tabula_tables::{
	Column, ColumnSet, RenderedTable, Result, SortState, Table, TableError, Theme,
};

#[cfg(feature = "sql")]
pub use tabula_query::{SqlAdapter, SqlBackend, SqlExecutor};

/// Prelude module for convenient imports
///
/// Import everything needed to declare and serve a table:
///
/// ```rust
/// use tabula::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		CellValue, Column, ColumnSet, MemoryAdapter, MemoryQuery, QueryAdapter, Record,
		RenderedTable, SortDirection, SortState, Table, TableError, TableSettings, Theme,
	};

	#[cfg(feature = "sql")]
	pub use crate::{SqlAdapter, SqlBackend, SqlExecutor};

	// External
	pub use async_trait::async_trait;
}
