//! SQL query adapter built on sea-query
//!
//! [`SqlAdapter`] builds `SELECT * FROM <table>` statements, applies ordering
//! and paging, renders them for a [`SqlBackend`] and hands the SQL text to a
//! caller supplied [`SqlExecutor`]. The executor owns the connection and the
//! row decoding; this crate never talks to a database.
//!
//! ```rust
//! use sea_query::{Alias, Expr, Order, SelectStatement};
//! use tabula_core::SortDirection;
//! use tabula_query::sql::order_for;
//!
//! // A custom sort strategy ordering users by how many companies they own
//! let by_companies = |mut query: SelectStatement, direction: SortDirection| {
//!     query
//!         .expr_as(
//!             Expr::cust("(SELECT COUNT(*) FROM companies WHERE companies.owner_id = users.id)"),
//!             Alias::new("companies_count"),
//!         )
//!         .order_by(Alias::new("companies_count"), order_for(direction));
//!     query
//! };
//! # let _ = by_companies;
//! ```

use crate::adapter::QueryAdapter;
use crate::error::{QueryError, Result};
use async_trait::async_trait;
use sea_query::{
	Alias, Asterisk, Expr, MysqlQueryBuilder, Order, PostgresQueryBuilder, Query,
	SelectStatement, SqliteQueryBuilder,
};
use std::fmt;
use tabula_core::SortDirection;

/// SQL dialect used to render statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlBackend {
	/// PostgreSQL
	#[default]
	Postgres,
	/// MySQL / MariaDB
	MySql,
	/// SQLite
	Sqlite,
}

impl SqlBackend {
	/// Renders `statement` as SQL text with inlined values
	pub fn render(&self, statement: &SelectStatement) -> String {
		match self {
			Self::Postgres => statement.to_string(PostgresQueryBuilder),
			Self::MySql => statement.to_string(MysqlQueryBuilder),
			Self::Sqlite => statement.to_string(SqliteQueryBuilder),
		}
	}
}

/// Maps a sort direction to a sea-query order
pub fn order_for(direction: SortDirection) -> Order {
	match direction {
		SortDirection::Ascending => Order::Asc,
		SortDirection::Descending => Order::Desc,
	}
}

/// Runs rendered SQL against a database
#[async_trait]
pub trait SqlExecutor: Send + Sync {
	/// Decoded row type
	type Row: Send;

	/// Runs a `SELECT` and decodes every returned row
	async fn fetch_all(&self, sql: &str) -> Result<Vec<Self::Row>>;

	/// Runs a `SELECT COUNT(*)` and returns the single count
	async fn fetch_count(&self, sql: &str) -> Result<u64>;
}

/// Query adapter over a single SQL table
pub struct SqlAdapter<E> {
	table: String,
	backend: SqlBackend,
	executor: E,
}

impl<E> SqlAdapter<E> {
	/// Creates an adapter selecting from `table`
	pub fn new(table: impl Into<String>, backend: SqlBackend, executor: E) -> Self {
		Self {
			table: table.into(),
			backend,
			executor,
		}
	}

	/// Returns the table name
	pub fn table(&self) -> &str {
		&self.table
	}

	/// Returns the SQL dialect
	pub fn backend(&self) -> SqlBackend {
		self.backend
	}

	/// Returns the executor
	pub fn executor(&self) -> &E {
		&self.executor
	}

	/// Builds the `COUNT(*)` statement wrapping `query`
	pub fn count_statement(&self, query: SelectStatement) -> SelectStatement {
		Query::select()
			.expr(Expr::cust("COUNT(*)"))
			.from_subquery(query, Alias::new("matched"))
			.to_owned()
	}
}

impl<E> fmt::Debug for SqlAdapter<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SqlAdapter")
			.field("table", &self.table)
			.field("backend", &self.backend)
			.finish_non_exhaustive()
	}
}

#[async_trait]
impl<E> QueryAdapter for SqlAdapter<E>
where
	E: SqlExecutor,
{
	type Row = E::Row;
	type Query = SelectStatement;

	fn query(&self) -> Self::Query {
		Query::select()
			.column(Asterisk)
			.from(Alias::new(self.table.clone()))
			.to_owned()
	}

	fn order_by(
		&self,
		mut query: Self::Query,
		field: &str,
		direction: SortDirection,
	) -> Self::Query {
		query.order_by(Alias::new(field.to_string()), order_for(direction));
		query
	}

	fn paginate(&self, mut query: Self::Query, offset: usize, limit: usize) -> Self::Query {
		query.limit(limit as u64).offset(offset as u64);
		query
	}

	async fn count(&self, query: Self::Query) -> Result<usize> {
		let sql = self.backend.render(&self.count_statement(query));
		tracing::debug!(table = %self.table, %sql, "counting rows");
		let count = self.executor.fetch_count(&sql).await?;
		usize::try_from(count).map_err(|_| QueryError::CountOutOfRange(count))
	}

	async fn fetch(&self, query: Self::Query) -> Result<Vec<Self::Row>> {
		let sql = self.backend.render(&query);
		tracing::debug!(table = %self.table, %sql, "fetching rows");
		self.executor.fetch_all(&sql).await
	}
}
