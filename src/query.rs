//! Query adapters and pagination.
//!
//! Implement [`QueryAdapter`] to serve tables from another data source, or
//! [`SqlExecutor`](tabula_query::sql::SqlExecutor) to run the statements of
//! the built-in SQL adapter on your own connection.

pub use tabula_query::*;
