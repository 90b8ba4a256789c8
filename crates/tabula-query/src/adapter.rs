//! The query adapter trait

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tabula_core::SortDirection;

/// Custom sort strategy of a column
///
/// Receives the query being built and the requested direction and returns the
/// ordered query. Used in place of the default "order by sort key" when a
/// column sorts by something that is not a plain field (a relation count, a
/// computed expression).
pub type SortFn<Q> = Arc<dyn Fn(Q, SortDirection) -> Q + Send + Sync>;

/// Restriction applied to the base query of a table before ordering
pub type ScopeFn<Q> = Arc<dyn Fn(Q) -> Q + Send + Sync>;

/// Translates sort and paging requests into data fetches
///
/// Queries are values: every builder method takes the query by value and
/// returns the refined query, so custom [`SortFn`]s compose with the default
/// ordering.
#[async_trait]
pub trait QueryAdapter: Send + Sync {
	/// Type of the rows returned by [`QueryAdapter::fetch`]
	type Row: Send;

	/// Query under construction
	type Query: Clone + Send;

	/// Returns an unordered query over every row of the source
	fn query(&self) -> Self::Query;

	/// Orders `query` by `field`
	///
	/// Successive calls add tie breakers, like `ORDER BY a, b`.
	fn order_by(&self, query: Self::Query, field: &str, direction: SortDirection) -> Self::Query;

	/// Restricts `query` to `limit` rows starting at `offset`
	fn paginate(&self, query: Self::Query, offset: usize, limit: usize) -> Self::Query;

	/// Counts the rows matched by `query`, ignoring ordering and paging
	async fn count(&self, query: Self::Query) -> Result<usize>;

	/// Runs `query` and returns its rows in order
	async fn fetch(&self, query: Self::Query) -> Result<Vec<Self::Row>>;
}
