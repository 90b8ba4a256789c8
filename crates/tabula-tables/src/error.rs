//! Error types for table configuration and sorting

use tabula_conf::SettingsError;
use tabula_query::QueryError;
use thiserror::Error;

/// Errors raised while configuring, sorting or loading a table
///
/// Everything except [`TableError::Query`] is a configuration or input
/// validation error and leaves table state unchanged.
#[derive(Debug, Error)]
pub enum TableError {
	/// The column set is empty
	#[error("Table has no columns")]
	NoColumns,

	/// More than one column asks to be sorted by default
	#[error("Columns '{first}' and '{second}' are both sorted by default")]
	MultipleDefaultSort {
		/// Label of the first default-sorted column
		first: String,
		/// Label of the second default-sorted column
		second: String,
	},

	/// Two sortable columns share a sort key
	#[error("Sort key '{0}' is used by more than one column")]
	DuplicateSortKey(String),

	/// A column has no formatter and the row type has no matching field
	#[error("Column '{column}' has no formatter and rows have no '{field}' field")]
	MissingFormatter {
		/// Column label
		column: String,
		/// Attribute the column would display
		field: String,
	},

	/// A sortable column orders by a field the row type does not have
	#[error("Column '{column}' sorts by unknown field '{field}' without a custom sort")]
	UnknownSortField {
		/// Column label
		column: String,
		/// Attribute the column would order by
		field: String,
	},

	/// A toggle or query string named a key that no sortable column has
	#[error("Unknown sort key: {0}")]
	UnknownSortKey(String),

	/// Page numbers start at 1
	#[error("Invalid page number: {0}")]
	InvalidPage(usize),

	/// The query adapter failed
	#[error(transparent)]
	Query(#[from] QueryError),

	/// Settings could not be loaded
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
