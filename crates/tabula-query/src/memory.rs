//! In-memory query adapter

use crate::adapter::QueryAdapter;
use crate::error::Result;
use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tabula_core::{Record, SortDirection};

type Comparator<R> = Arc<dyn Fn(&R, &R) -> Ordering + Send + Sync>;
type Predicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// A lazily evaluated query over in-memory rows
///
/// Filters keep rows matching every predicate, orderings compose left to
/// right (the first is the primary key), and sorting is stable so rows that
/// compare equal keep their source order.
///
/// # Example
///
/// ```rust
/// use tabula_core::SortDirection;
/// use tabula_query::MemoryQuery;
///
/// let rows = vec![(2, 'b'), (2, 'a'), (1, 'c')];
/// let query = MemoryQuery::new()
///     .order_by_key(|row: &(i32, char)| row.0, SortDirection::Descending)
///     .order_by_key(|row: &(i32, char)| row.1, SortDirection::Ascending);
///
/// let letters: Vec<char> = query.apply(&rows).into_iter().map(|row| row.1).collect();
/// assert_eq!(letters, ['a', 'b', 'c']);
/// ```
pub struct MemoryQuery<R> {
	filters: Vec<Predicate<R>>,
	orderings: Vec<Comparator<R>>,
	offset: usize,
	limit: Option<usize>,
}

impl<R> Clone for MemoryQuery<R> {
	fn clone(&self) -> Self {
		Self {
			filters: self.filters.clone(),
			orderings: self.orderings.clone(),
			offset: self.offset,
			limit: self.limit,
		}
	}
}

impl<R> Default for MemoryQuery<R> {
	fn default() -> Self {
		Self {
			filters: Vec::new(),
			orderings: Vec::new(),
			offset: 0,
			limit: None,
		}
	}
}

impl<R> fmt::Debug for MemoryQuery<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryQuery")
			.field("filters", &self.filters.len())
			.field("orderings", &self.orderings.len())
			.field("offset", &self.offset)
			.field("limit", &self.limit)
			.finish()
	}
}

impl<R: 'static> MemoryQuery<R> {
	/// Creates a query matching every row, in source order
	pub fn new() -> Self {
		Self::default()
	}

	/// Keeps only rows for which `predicate` returns true
	pub fn filter<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&R) -> bool + Send + Sync + 'static,
	{
		self.filters.push(Arc::new(predicate));
		self
	}

	/// Orders rows with an ascending comparator
	pub fn order_by_with<F>(mut self, compare: F) -> Self
	where
		F: Fn(&R, &R) -> Ordering + Send + Sync + 'static,
	{
		self.orderings.push(Arc::new(compare));
		self
	}

	/// Orders rows by a derived key
	pub fn order_by_key<K, F>(self, key: F, direction: SortDirection) -> Self
	where
		K: Ord + 'static,
		F: Fn(&R) -> K + Send + Sync + 'static,
	{
		self.order_by_with(move |a, b| direction.apply(key(a).cmp(&key(b))))
	}

	/// Orders rows by a [`Record`] field; rows without the field sort first
	pub fn order_by_field(self, field: &str, direction: SortDirection) -> Self
	where
		R: Record,
	{
		let field = field.to_string();
		self.order_by_key(
			move |row: &R| row.value(&field).unwrap_or_default(),
			direction,
		)
	}

	/// Skips the first `offset` matching rows
	pub fn offset(mut self, offset: usize) -> Self {
		self.offset = offset;
		self
	}

	/// Returns at most `limit` rows
	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}
}

impl<R> MemoryQuery<R> {
	/// Returns true if at least one ordering is set
	pub fn is_ordered(&self) -> bool {
		!self.orderings.is_empty()
	}

	/// Returns true if `row` passes every filter
	pub fn matches(&self, row: &R) -> bool {
		self.filters.iter().all(|predicate| predicate(row))
	}

	/// Counts the rows of `rows` passing every filter
	pub fn count(&self, rows: &[R]) -> usize {
		rows.iter().filter(|row| self.matches(row)).count()
	}

	/// Evaluates the query against `rows`
	pub fn apply<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
		let mut matched: Vec<&R> = rows.iter().filter(|row| self.matches(row)).collect();
		if self.is_ordered() {
			matched.sort_by(|a, b| self.compare(a, b));
		}

		let page = matched.into_iter().skip(self.offset);
		match self.limit {
			Some(limit) => page.take(limit).collect(),
			None => page.collect(),
		}
	}

	fn compare(&self, a: &R, b: &R) -> Ordering {
		self.orderings
			.iter()
			.map(|compare| compare(a, b))
			.find(|ordering| ordering.is_ne())
			.unwrap_or(Ordering::Equal)
	}
}

/// Query adapter over rows held in memory
pub struct MemoryAdapter<R> {
	rows: Arc<Vec<R>>,
}

impl<R> MemoryAdapter<R> {
	/// Creates an adapter over `rows`, kept in the given source order
	pub fn new(rows: Vec<R>) -> Self {
		Self {
			rows: Arc::new(rows),
		}
	}

	/// Returns the source rows, unordered
	pub fn rows(&self) -> &[R] {
		&self.rows
	}
}

impl<R> Clone for MemoryAdapter<R> {
	fn clone(&self) -> Self {
		Self {
			rows: Arc::clone(&self.rows),
		}
	}
}

impl<R> fmt::Debug for MemoryAdapter<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryAdapter")
			.field("rows", &self.rows.len())
			.finish()
	}
}

#[async_trait]
impl<R> QueryAdapter for MemoryAdapter<R>
where
	R: Record + Clone + Send + Sync + 'static,
{
	type Row = R;
	type Query = MemoryQuery<R>;

	fn query(&self) -> Self::Query {
		MemoryQuery::new()
	}

	fn order_by(&self, query: Self::Query, field: &str, direction: SortDirection) -> Self::Query {
		query.order_by_field(field, direction)
	}

	fn paginate(&self, query: Self::Query, offset: usize, limit: usize) -> Self::Query {
		query.offset(offset).limit(limit)
	}

	async fn count(&self, query: Self::Query) -> Result<usize> {
		Ok(query.count(&self.rows))
	}

	async fn fetch(&self, query: Self::Query) -> Result<Vec<Self::Row>> {
		let rows: Vec<R> = query.apply(&self.rows).into_iter().cloned().collect();
		tracing::debug!(?query, fetched = rows.len(), "fetched in-memory rows");
		Ok(rows)
	}
}
