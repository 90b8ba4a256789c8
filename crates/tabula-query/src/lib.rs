//! Query adapters for tabula tables
//!
//! A [`QueryAdapter`] is the only boundary between a table and its data:
//! it builds a base query, applies ordering and paging to it, and runs it.
//! Tables never sort rows themselves.
//!
//! - [`MemoryAdapter`]: rows held in memory, ordered by [`Record`] fields or
//!   by arbitrary comparators
//! - `SqlAdapter` (feature `sql`): `SELECT` statements built with
//!   sea-query and run by a caller supplied [`sql::SqlExecutor`]
//!
//! [`Record`]: tabula_core::Record

#![warn(missing_docs)]

pub mod adapter;
pub mod error;
pub mod memory;
pub mod pagination;
#[cfg(feature = "sql")]
pub mod sql;

pub use adapter::{QueryAdapter, ScopeFn, SortFn};
pub use error::{QueryError, Result};
pub use memory::{MemoryAdapter, MemoryQuery};
pub use pagination::Pagination;
#[cfg(feature = "sql")]
pub use sql::{SqlAdapter, SqlBackend, SqlExecutor};

// Custom sort strategies of SQL tables build sea-query expressions
#[cfg(feature = "sql")]
pub use sea_query;
