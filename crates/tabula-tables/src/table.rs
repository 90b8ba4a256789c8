//! The table component

use crate::column_set::ColumnSet;
use crate::error::{Result, TableError};
use crate::query::apply_sort;
use crate::render::{PageInfo, RenderedTable, render};
use crate::sort_state::SortState;
use crate::theme::{Theme, theme_for};
use std::fmt;
use std::sync::Arc;
use tabula_conf::TableSettings;
use tabula_core::Record;
use tabula_query::{Pagination, QueryAdapter, ScopeFn};

/// A sortable, paginated table over a query adapter
///
/// The table owns one [`SortState`] and the rows of the current page. Every
/// action ([`Table::init`], [`Table::sort_by`], [`Table::set_page`]) re-fetches:
/// the matching rows are counted on the scoped query, which is then ordered
/// and paged before fetching. The new sort and page are kept only once the
/// fetch succeeds, so the rows always follow the reported sort state.
///
/// Actions take `&mut self`, so a table handles one action at a time.
pub struct Table<A: QueryAdapter> {
	columns: Arc<ColumnSet<A::Row, A::Query>>,
	adapter: A,
	settings: Arc<TableSettings>,
	scope: Option<ScopeFn<A::Query>>,
	sort: SortState,
	pagination: Pagination,
	rows: Vec<A::Row>,
}

impl<A: QueryAdapter> Table<A> {
	/// Creates a table with default settings
	///
	/// No rows are loaded until [`Table::init`] runs.
	pub fn new(columns: ColumnSet<A::Row, A::Query>, adapter: A) -> Self {
		Self::from_shared(Arc::new(columns), adapter)
	}

	/// Creates a table from a column set shared with other tables
	pub fn from_shared(columns: Arc<ColumnSet<A::Row, A::Query>>, adapter: A) -> Self {
		let settings = Arc::new(TableSettings::default());
		Self {
			sort: SortState::initial(&columns),
			pagination: Pagination::new(settings.per_page),
			columns,
			adapter,
			settings,
			scope: None,
			rows: Vec::new(),
		}
	}

	/// Replaces the settings, resetting the page size to `settings.per_page`
	pub fn with_settings(mut self, settings: impl Into<Arc<TableSettings>>) -> Self {
		self.settings = settings.into();
		self.pagination = Pagination::new(self.settings.per_page);
		self
	}

	/// Overrides the page size
	pub fn per_page(mut self, per_page: usize) -> Self {
		self.pagination = Pagination::new(per_page);
		self
	}

	/// Restricts the rows of the table
	///
	/// The scope runs on the base query before counting and ordering.
	pub fn scope<F>(mut self, scope: F) -> Self
	where
		F: Fn(A::Query) -> A::Query + Send + Sync + 'static,
	{
		self.scope = Some(Arc::new(scope));
		self
	}

	/// Returns the columns
	pub fn columns(&self) -> &ColumnSet<A::Row, A::Query> {
		&self.columns
	}

	/// Returns the query adapter
	pub fn adapter(&self) -> &A {
		&self.adapter
	}

	/// Returns the settings
	pub fn settings(&self) -> &TableSettings {
		&self.settings
	}

	/// Returns the current sort state
	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	/// Returns the pagination of the loaded page
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	/// Returns the rows of the loaded page, in display order
	pub fn rows(&self) -> &[A::Row] {
		&self.rows
	}

	/// Resets the sort to the column defaults and loads the first page
	pub async fn init(&mut self) -> Result<()> {
		let sort = SortState::initial(&self.columns);
		self.load(sort, 1).await
	}

	/// Restores sort and page from query string values and loads the page
	///
	/// Unknown sort keys fall back to the column defaults and unreadable page
	/// numbers to the first page.
	pub async fn init_from_query(&mut self, sort: Option<&str>, page: Option<&str>) -> Result<()> {
		let sort = SortState::from_query(&self.columns, sort);
		let page = page
			.and_then(|page| page.trim().parse::<usize>().ok())
			.filter(|page| *page > 0)
			.unwrap_or(1);
		self.load(sort, page).await
	}

	/// Toggles the sort on `key`, then reloads from the first page
	///
	/// # Errors
	///
	/// [`TableError::UnknownSortKey`] if no sortable column has `key`, or the
	/// adapter error when the reload fails. In both cases the sort state and
	/// the loaded rows are left unchanged.
	pub async fn sort_by(&mut self, key: &str) -> Result<()> {
		let sort = match self.sort.toggled(&self.columns, key) {
			Ok(sort) => sort,
			Err(error) => {
				tracing::warn!(key, %error, "rejected sort toggle");
				return Err(error);
			}
		};
		tracing::debug!(key, direction = ?sort.direction(), "sort toggled");
		self.load(sort, 1).await
	}

	/// Loads page `page`, clamped to the last page
	///
	/// # Errors
	///
	/// [`TableError::InvalidPage`] for page 0. A failed reload keeps the
	/// current page.
	pub async fn set_page(&mut self, page: usize) -> Result<()> {
		if page == 0 {
			return Err(TableError::InvalidPage(page));
		}
		self.load(self.sort.clone(), page).await
	}

	/// Re-counts and re-fetches the current page
	pub async fn refresh(&mut self) -> Result<()> {
		self.load(self.sort.clone(), self.pagination.current_page).await
	}

	/// Fetches `page` under `sort` and only then replaces the table state
	async fn load(&mut self, sort: SortState, page: usize) -> Result<()> {
		let base = self.base_query();
		let total = self.adapter.count(base.clone()).await?;
		let mut pagination = self.pagination.clone();
		pagination.current_page = page;
		pagination.set_total_items(total);

		let ordered = apply_sort(&self.adapter, &self.columns, &sort, base);
		let paged = self
			.adapter
			.paginate(ordered, pagination.start_index(), pagination.per_page);
		let rows = self.adapter.fetch(paged).await?;

		tracing::debug!(
			sort = ?sort.to_query(),
			page = pagination.current_page,
			rows = rows.len(),
			total,
			"table loaded"
		);
		self.sort = sort;
		self.pagination = pagination;
		self.rows = rows;
		Ok(())
	}

	fn base_query(&self) -> A::Query {
		let query = self.adapter.query();
		match &self.scope {
			Some(scope) => scope(query),
			None => query,
		}
	}
}

impl<A> Table<A>
where
	A: QueryAdapter,
	A::Row: Record,
{
	/// Renders the loaded page
	pub fn render(&self) -> RenderedTable {
		let mut table = render(&self.columns, &self.rows, &self.sort, &self.settings);
		table.page = Some(PageInfo::from(&self.pagination));
		table
	}

	/// Renders the loaded page as HTML with the theme chosen in settings
	pub fn render_html(&self) -> String {
		self.render_with(theme_for(self.settings.theme).as_ref())
	}

	/// Renders the loaded page as HTML with `theme`
	pub fn render_with(&self, theme: &dyn Theme) -> String {
		theme.render(&self.render(), &self.settings)
	}
}

impl<A> fmt::Debug for Table<A>
where
	A: QueryAdapter + fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("columns", &self.columns.len())
			.field("adapter", &self.adapter)
			.field("sort", &self.sort)
			.field("pagination", &self.pagination)
			.field("rows", &self.rows.len())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::Column;
	use async_trait::async_trait;
	use rstest::*;
	use std::sync::atomic::{AtomicBool, Ordering};
	use tabula_core::{CellValue, SortDirection};
	use tabula_query::{MemoryAdapter, MemoryQuery, QueryError};

	#[derive(Debug, Clone, PartialEq)]
	struct City {
		name: &'static str,
		population: i64,
	}

	impl Record for City {
		fn fields() -> &'static [&'static str] {
			&["name", "population"]
		}

		fn value(&self, field: &str) -> Option<CellValue> {
			match field {
				"name" => Some(self.name.into()),
				"population" => Some(self.population.into()),
				_ => None,
			}
		}
	}

	#[fixture]
	fn cities() -> Vec<City> {
		[
			("Lyon", 522),
			("Paris", 2102),
			("Nice", 342),
			("Lille", 236),
			("Nantes", 320),
		]
		.into_iter()
		.map(|(name, population)| City { name, population })
		.collect()
	}

	fn columns() -> ColumnSet<City> {
		ColumnSet::builder()
			.column(Column::new("Name").sortable())
			.column(Column::new("Population").sort_by_default(SortDirection::Descending))
			.build()
			.unwrap()
	}

	fn names(table: &Table<MemoryAdapter<City>>) -> Vec<&'static str> {
		table.rows().iter().map(|city| city.name).collect()
	}

	#[rstest]
	#[tokio::test]
	async fn test_init_applies_default_sort(cities: Vec<City>) {
		let mut table = Table::new(columns(), MemoryAdapter::new(cities));
		assert!(table.rows().is_empty());

		table.init().await.unwrap();

		assert_eq!(table.sort_state().to_query().as_deref(), Some("-population"));
		assert_eq!(names(&table), vec!["Paris", "Lyon", "Nice", "Nantes", "Lille"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_sort_by_refetches(cities: Vec<City>) {
		let mut table = Table::new(columns(), MemoryAdapter::new(cities));
		table.init().await.unwrap();

		table.sort_by("name").await.unwrap();
		assert_eq!(names(&table), vec!["Lille", "Lyon", "Nantes", "Nice", "Paris"]);

		table.sort_by("name").await.unwrap();
		assert_eq!(names(&table), vec!["Paris", "Nice", "Nantes", "Lyon", "Lille"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_sort_by_unknown_key_keeps_rows(cities: Vec<City>) {
		let mut table = Table::new(columns(), MemoryAdapter::new(cities));
		table.init().await.unwrap();
		let rows = table.rows().to_vec();
		let state = table.sort_state().clone();

		let result = table.sort_by("mayor").await;

		assert!(matches!(result, Err(TableError::UnknownSortKey(key)) if key == "mayor"));
		assert_eq!(table.rows(), rows.as_slice());
		assert_eq!(table.sort_state(), &state);
	}

	#[rstest]
	#[tokio::test]
	async fn test_pages(cities: Vec<City>) {
		let mut table = Table::new(columns(), MemoryAdapter::new(cities)).per_page(2);
		table.init().await.unwrap();
		assert_eq!(table.pagination().total_pages(), 3);
		assert_eq!(names(&table), vec!["Paris", "Lyon"]);

		table.set_page(3).await.unwrap();
		assert_eq!(names(&table), vec!["Lille"]);

		table.set_page(10).await.unwrap();
		assert_eq!(table.pagination().current_page, 3);

		// Sorting restarts from the first page
		table.sort_by("name").await.unwrap();
		assert_eq!(table.pagination().current_page, 1);
		assert_eq!(names(&table), vec!["Lille", "Lyon"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_page_zero_is_rejected(cities: Vec<City>) {
		let mut table = Table::new(columns(), MemoryAdapter::new(cities));
		table.init().await.unwrap();
		assert!(matches!(table.set_page(0).await, Err(TableError::InvalidPage(0))));
	}

	#[rstest]
	#[tokio::test]
	async fn test_scope_filters_before_count(cities: Vec<City>) {
		let mut table = Table::new(columns(), MemoryAdapter::new(cities))
			.scope(|query: MemoryQuery<City>| query.filter(|city: &City| city.population > 400));
		table.init().await.unwrap();

		assert_eq!(table.pagination().total_items, 2);
		assert_eq!(names(&table), vec!["Paris", "Lyon"]);
	}

	#[rstest]
	#[case(Some("name"), Some("2"), vec!["Nice", "Paris"])]
	#[case(Some("-name"), None, vec!["Paris", "Nice", "Nantes"])]
	#[case(Some("mayor"), Some("zero"), vec!["Paris", "Lyon", "Nice"])]
	#[tokio::test]
	async fn test_init_from_query(
		cities: Vec<City>,
		#[case] sort: Option<&str>,
		#[case] page: Option<&str>,
		#[case] expected: Vec<&str>,
	) {
		let mut table = Table::new(columns(), MemoryAdapter::new(cities)).per_page(3);
		table.init_from_query(sort, page).await.unwrap();
		assert_eq!(names(&table), expected);
	}

	#[rstest]
	#[tokio::test]
	async fn test_render_html_uses_settings(cities: Vec<City>) {
		let settings = TableSettings {
			theme: tabula_conf::ThemeKind::Plain,
			per_page: 2,
			..Default::default()
		};
		let mut table = Table::new(columns(), MemoryAdapter::new(cities)).with_settings(settings);
		table.init().await.unwrap();

		let rendered = table.render();
		assert_eq!(rendered.rows.len(), 2);
		assert_eq!(rendered.page.map(|page| page.total_pages), Some(3));

		let html = table.render_html();
		assert!(html.starts_with("<table>"));
		assert!(html.contains("<td>Paris</td>"));
		assert!(html.contains("href=\"?sort=-population&amp;page=2\""));
	}

	struct FailingAdapter;

	#[async_trait]
	impl QueryAdapter for FailingAdapter {
		type Row = City;
		type Query = ();

		fn query(&self) -> Self::Query {}

		fn order_by(&self, query: Self::Query, _field: &str, _direction: SortDirection) -> Self::Query {
			query
		}

		fn paginate(&self, query: Self::Query, _offset: usize, _limit: usize) -> Self::Query {
			query
		}

		async fn count(&self, _query: Self::Query) -> tabula_query::Result<usize> {
			Err(QueryError::Execution("connection refused".to_string()))
		}

		async fn fetch(&self, _query: Self::Query) -> tabula_query::Result<Vec<City>> {
			Ok(Vec::new())
		}
	}

	/// Memory adapter whose fetches fail once `fail_fetch` is set
	struct FlakyAdapter {
		inner: MemoryAdapter<City>,
		fail_fetch: AtomicBool,
	}

	#[async_trait]
	impl QueryAdapter for FlakyAdapter {
		type Row = City;
		type Query = MemoryQuery<City>;

		fn query(&self) -> Self::Query {
			self.inner.query()
		}

		fn order_by(&self, query: Self::Query, field: &str, direction: SortDirection) -> Self::Query {
			self.inner.order_by(query, field, direction)
		}

		fn paginate(&self, query: Self::Query, offset: usize, limit: usize) -> Self::Query {
			self.inner.paginate(query, offset, limit)
		}

		async fn count(&self, query: Self::Query) -> tabula_query::Result<usize> {
			self.inner.count(query).await
		}

		async fn fetch(&self, query: Self::Query) -> tabula_query::Result<Vec<City>> {
			if self.fail_fetch.load(Ordering::SeqCst) {
				return Err(QueryError::Execution("connection reset".to_string()));
			}
			self.inner.fetch(query).await
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_failed_reload_keeps_state_and_rows(cities: Vec<City>) {
		let adapter = FlakyAdapter {
			inner: MemoryAdapter::new(cities),
			fail_fetch: AtomicBool::new(false),
		};
		let mut table = Table::new(columns(), adapter).per_page(2);
		table.init().await.unwrap();
		table.sort_by("name").await.unwrap();
		table.set_page(2).await.unwrap();
		let state = table.sort_state().clone();
		let pagination = table.pagination().clone();
		let rows = table.rows().to_vec();
		assert_eq!(state.to_query().as_deref(), Some("name"));

		table.adapter().fail_fetch.store(true, Ordering::SeqCst);

		assert!(matches!(table.sort_by("name").await, Err(TableError::Query(_))));
		assert!(matches!(table.set_page(3).await, Err(TableError::Query(_))));
		assert!(matches!(table.init().await, Err(TableError::Query(_))));
		assert!(matches!(
			table.init_from_query(Some("-population"), Some("1")).await,
			Err(TableError::Query(_))
		));

		assert_eq!(table.sort_state(), &state);
		assert_eq!(table.pagination(), &pagination);
		assert_eq!(table.rows(), rows.as_slice());
		let rendered = table.render();
		let name_sort = rendered.headers[0].sort.as_ref().unwrap();
		assert_eq!(name_sort.query, "-name");
	}

	#[rstest]
	#[tokio::test]
	async fn test_adapter_errors_are_wrapped() {
		let columns: ColumnSet<City, ()> = ColumnSet::builder()
			.column(Column::new("Name").sortable())
			.build()
			.unwrap();
		let mut table = Table::new(columns, FailingAdapter);

		let error = table.init().await.unwrap_err();

		assert!(matches!(error, TableError::Query(QueryError::Execution(_))));
		assert_eq!(error.to_string(), "Query execution failed: connection refused");
	}
}
