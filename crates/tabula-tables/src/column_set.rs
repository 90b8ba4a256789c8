//! Validated, ordered column collections

use crate::column::Column;
use crate::error::{Result, TableError};
use std::collections::HashSet;
use std::fmt;
use tabula_core::Record;
use tabula_query::MemoryQuery;

/// An ordered, validated set of columns
///
/// Built once per table configuration through [`ColumnSet::builder`] and
/// immutable afterwards. Building checks that:
///
/// - there is at least one column
/// - at most one column is sorted by default
/// - sort keys are unique
/// - every column without a formatter displays a field of `R`
/// - every sortable column without a custom sort orders by a field of `R`
pub struct ColumnSet<R, Q = MemoryQuery<R>> {
	columns: Vec<Column<R, Q>>,
}

impl<R, Q> Clone for ColumnSet<R, Q> {
	fn clone(&self) -> Self {
		Self {
			columns: self.columns.clone(),
		}
	}
}

impl<R, Q> fmt::Debug for ColumnSet<R, Q> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.columns).finish()
	}
}

impl<R, Q> ColumnSet<R, Q> {
	/// Starts building a column set
	pub fn builder() -> ColumnSetBuilder<R, Q> {
		ColumnSetBuilder {
			columns: Vec::new(),
		}
	}

	/// Returns the columns in display order
	pub fn columns(&self) -> &[Column<R, Q>] {
		&self.columns
	}

	/// Iterates the columns in display order
	pub fn iter(&self) -> std::slice::Iter<'_, Column<R, Q>> {
		self.columns.iter()
	}

	/// Returns the number of columns
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Always false for a built set
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Finds the sortable column with sort key `key`
	pub fn sortable(&self, key: &str) -> Option<&Column<R, Q>> {
		self.columns
			.iter()
			.find(|column| column.sort_key() == Some(key))
	}

	/// Returns the column sorted by default, if any
	pub fn default_sort_column(&self) -> Option<&Column<R, Q>> {
		self.columns
			.iter()
			.find(|column| column.default_sort().is_some())
	}

	/// Returns the first sortable column, if any
	pub fn first_sortable(&self) -> Option<&Column<R, Q>> {
		self.columns.iter().find(|column| column.is_sortable())
	}

	/// Returns true if at least one column is sortable
	pub fn has_sortable(&self) -> bool {
		self.first_sortable().is_some()
	}
}

impl<'a, R, Q> IntoIterator for &'a ColumnSet<R, Q> {
	type Item = &'a Column<R, Q>;
	type IntoIter = std::slice::Iter<'a, Column<R, Q>>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.iter()
	}
}

/// Builder for [`ColumnSet`]
pub struct ColumnSetBuilder<R, Q = MemoryQuery<R>> {
	columns: Vec<Column<R, Q>>,
}

impl<R, Q> fmt::Debug for ColumnSetBuilder<R, Q> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnSetBuilder")
			.field("columns", &self.columns)
			.finish()
	}
}

impl<R, Q> ColumnSetBuilder<R, Q> {
	/// Appends a column
	pub fn column(mut self, column: Column<R, Q>) -> Self {
		self.columns.push(column);
		self
	}

	/// Appends several columns
	pub fn columns(mut self, columns: impl IntoIterator<Item = Column<R, Q>>) -> Self {
		self.columns.extend(columns);
		self
	}

	/// Validates the columns and builds the set
	pub fn build(self) -> Result<ColumnSet<R, Q>>
	where
		R: Record,
	{
		validate(&self.columns)?;
		tracing::debug!(
			columns = self.columns.len(),
			sortable = self.columns.iter().filter(|c| c.is_sortable()).count(),
			"built column set"
		);
		Ok(ColumnSet {
			columns: self.columns,
		})
	}
}

fn validate<R: Record, Q>(columns: &[Column<R, Q>]) -> Result<()> {
	if columns.is_empty() {
		return Err(TableError::NoColumns);
	}

	let mut defaults = columns.iter().filter(|c| c.default_sort().is_some());
	if let (Some(first), Some(second)) = (defaults.next(), defaults.next()) {
		return Err(TableError::MultipleDefaultSort {
			first: first.label().to_string(),
			second: second.label().to_string(),
		});
	}

	let mut keys = HashSet::new();
	for key in columns.iter().filter_map(|c| c.sort_key()) {
		if !keys.insert(key) {
			return Err(TableError::DuplicateSortKey(key.to_string()));
		}
	}

	for column in columns {
		if !column.has_formatter() && !R::has_field(column.field()) {
			return Err(TableError::MissingFormatter {
				column: column.label().to_string(),
				field: column.field().to_string(),
			});
		}
		if column.is_sortable() && column.custom_sort().is_none() && !R::has_field(column.field())
		{
			return Err(TableError::UnknownSortField {
				column: column.label().to_string(),
				field: column.field().to_string(),
			});
		}
	}

	Ok(())
}
