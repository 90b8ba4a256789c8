//! Theme-independent table rendering
//!
//! [`render`] is a pure function: the same columns, rows, state and settings
//! always produce the same [`RenderedTable`]. Themes turn that structure into
//! markup.

use crate::column_set::ColumnSet;
use crate::sort_state::SortState;
use serde::Serialize;
use tabula_conf::TableSettings;
use tabula_core::Record;
use tabula_query::Pagination;

/// Sort status of a sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStatus {
	/// Another column is active
	Unsorted,
	/// Active, ascending
	Ascending,
	/// Active, descending
	Descending,
}

/// Clickable sort control of a header cell
///
/// `icon` and `title` describe what a click does: an ascending column offers
/// to sort descending and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortControl {
	/// Sort key passed to [`Table::sort_by`](crate::Table::sort_by)
	pub key: String,
	/// Current status of the column
	pub status: SortStatus,
	/// Trusted icon markup
	pub icon: String,
	/// Link title
	pub title: String,
	/// Query string value of the state after a click (`name`, `-name`)
	pub query: String,
}

/// A header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
	/// Column label
	pub label: String,
	/// Sort control, `None` for columns that cannot be sorted
	pub sort: Option<SortControl>,
}

/// A body cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyCell {
	/// Formatted, unescaped text
	pub value: String,
	/// CSS classes of the column
	pub css_class: String,
}

/// Theme-independent table structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
	/// One cell per column
	pub headers: Vec<HeaderCell>,
	/// One row per fetched record, one cell per column
	pub rows: Vec<Vec<BodyCell>>,
	/// Query string value of the current sort, kept by pagination links
	pub sort_query: Option<String>,
	/// Current page, when the table is paginated
	pub page: Option<PageInfo>,
}

impl RenderedTable {
	/// Returns true when no row was fetched
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Number of columns
	pub fn column_count(&self) -> usize {
		self.headers.len()
	}
}

/// Pagination summary of a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
	/// Current page, starting at 1
	pub current: usize,
	/// Number of pages, 0 for an empty table
	pub total_pages: usize,
	/// 1-based position of the first row shown, 0 when empty
	pub first_item: usize,
	/// 1-based position of the last row shown
	pub last_item: usize,
	/// Number of rows matched
	pub total_items: usize,
}

impl From<&Pagination> for PageInfo {
	fn from(pagination: &Pagination) -> Self {
		let last_item = pagination.end_index();
		let first_item = if last_item == 0 {
			0
		} else {
			pagination.start_index() + 1
		};
		Self {
			current: pagination.current_page,
			total_pages: pagination.total_pages(),
			first_item,
			last_item,
			total_items: pagination.total_items,
		}
	}
}

impl PageInfo {
	/// Returns the previous page number, if any
	pub fn prev(&self) -> Option<usize> {
		(self.current > 1).then(|| self.current - 1)
	}

	/// Returns the next page number, if any
	pub fn next(&self) -> Option<usize> {
		(self.current < self.total_pages).then(|| self.current + 1)
	}
}

/// Builds the sort control of the column with sort key `key`
pub fn sort_control(key: &str, state: &SortState, settings: &TableSettings) -> SortControl {
	let (status, icon, title) = match (state.is_active(key), state.is_ascending()) {
		(false, _) => (
			SortStatus::Unsorted,
			&settings.icon.sort,
			&settings.title.sort_asc,
		),
		(true, true) => (
			SortStatus::Ascending,
			&settings.icon.sort_desc,
			&settings.title.sort_desc,
		),
		(true, false) => (
			SortStatus::Descending,
			&settings.icon.sort_asc,
			&settings.title.sort_asc,
		),
	};

	// Same transition as SortState::toggled, without needing the column set
	let next_ascending = status != SortStatus::Ascending;
	let query = if next_ascending {
		key.to_string()
	} else {
		format!("-{}", key)
	};

	SortControl {
		key: key.to_string(),
		status,
		icon: icon.clone(),
		title: title.clone(),
		query,
	}
}

/// Renders headers and body cells of `rows`
///
/// `rows` must already be ordered and paged; rendering never reorders.
pub fn render<R: Record, Q>(
	columns: &ColumnSet<R, Q>,
	rows: &[R],
	state: &SortState,
	settings: &TableSettings,
) -> RenderedTable {
	let headers = columns
		.iter()
		.map(|column| HeaderCell {
			label: column.label().to_string(),
			sort: column
				.sort_key()
				.map(|key| sort_control(key, state, settings)),
		})
		.collect();

	let rows = rows
		.iter()
		.map(|row| {
			columns
				.iter()
				.map(|column| BodyCell {
					value: column.format_value(row),
					css_class: column.css_class().to_string(),
				})
				.collect()
		})
		.collect();

	RenderedTable {
		headers,
		rows,
		sort_query: state.to_query(),
		page: None,
	}
}
