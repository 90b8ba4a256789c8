//! Active sort of a table

use crate::column::Column;
use crate::column_set::ColumnSet;
use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use tabula_core::SortDirection;

/// Which column a table is sorted by, and in which direction
///
/// `active_key` is either `None` or the sort key of a sortable column of the
/// column set the state was derived from. When it is `None`, `ascending` is
/// false and no ordering is applied.
///
/// # Example
///
/// ```rust
/// use tabula_core::{CellValue, Record, SortDirection};
/// use tabula_tables::{Column, ColumnSet, SortState};
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl Record for User {
///     fn fields() -> &'static [&'static str] {
///         &["id", "name"]
///     }
///
///     fn value(&self, field: &str) -> Option<CellValue> {
///         match field {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
///
/// let columns: ColumnSet<User> = ColumnSet::builder()
///     .column(Column::new("Id"))
///     .column(Column::new("Name").sort_by_default(SortDirection::Ascending))
///     .build()
///     .unwrap();
///
/// let mut state = SortState::initial(&columns);
/// assert_eq!(state.active_key(), Some("name"));
/// assert!(state.is_ascending());
///
/// state.toggle(&columns, "name").unwrap();
/// assert!(!state.is_ascending());
///
/// // "id" is not sortable
/// assert!(state.toggle(&columns, "id").is_err());
/// assert_eq!(state.to_query().as_deref(), Some("-name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
	active_key: Option<String>,
	ascending: bool,
}

impl SortState {
	/// Returns a state that applies no ordering
	pub fn unsorted() -> Self {
		Self::default()
	}

	/// Derives the initial state of `columns`
	///
	/// The column sorted by default wins; otherwise the first sortable column
	/// is sorted ascending; otherwise the table is unsorted.
	pub fn initial<R, Q>(columns: &ColumnSet<R, Q>) -> Self {
		if let Some(column) = columns.default_sort_column() {
			let direction = column.default_sort().unwrap_or_default();
			return Self::active(column.field(), direction);
		}
		match columns.first_sortable() {
			Some(column) => Self::active(column.field(), SortDirection::Ascending),
			None => Self::unsorted(),
		}
	}

	fn active(key: &str, direction: SortDirection) -> Self {
		Self {
			active_key: Some(key.to_string()),
			ascending: direction.is_ascending(),
		}
	}

	/// Returns the sort key of the active column
	pub fn active_key(&self) -> Option<&str> {
		self.active_key.as_deref()
	}

	/// Returns true when sorting ascending
	pub fn is_ascending(&self) -> bool {
		self.ascending
	}

	/// Returns the direction of the active sort, or `None` when unsorted
	pub fn direction(&self) -> Option<SortDirection> {
		self.active_key
			.as_ref()
			.map(|_| SortDirection::from_ascending(self.ascending))
	}

	/// Returns true if `key` is the active sort key
	pub fn is_active(&self, key: &str) -> bool {
		self.active_key() == Some(key)
	}

	/// Returns the active column of `columns`
	pub fn active_column<'a, R, Q>(&self, columns: &'a ColumnSet<R, Q>) -> Option<&'a Column<R, Q>> {
		self.active_key().and_then(|key| columns.sortable(key))
	}

	/// Returns the state after toggling `key`, leaving `self` untouched
	///
	/// Toggling the active key flips the direction; toggling another sortable
	/// key makes it active, ascending.
	///
	/// # Errors
	///
	/// [`TableError::UnknownSortKey`] if no sortable column has `key`.
	pub fn toggled<R, Q>(&self, columns: &ColumnSet<R, Q>, key: &str) -> Result<Self> {
		if columns.sortable(key).is_none() {
			return Err(TableError::UnknownSortKey(key.to_string()));
		}
		let direction = if self.is_active(key) {
			SortDirection::from_ascending(self.ascending).toggle()
		} else {
			SortDirection::Ascending
		};
		Ok(Self::active(key, direction))
	}

	/// Toggles `key` in place
	///
	/// On error the state is left unchanged.
	pub fn toggle<R, Q>(&mut self, columns: &ColumnSet<R, Q>, key: &str) -> Result<()> {
		*self = self.toggled(columns, key)?;
		Ok(())
	}

	/// Formats the state as a query string value: `name` or `-name`
	pub fn to_query(&self) -> Option<String> {
		let key = self.active_key()?;
		Some(SortDirection::from_ascending(self.ascending).to_query(key))
	}

	/// Parses a query string value produced by [`SortState::to_query`]
	///
	/// Falls back to [`SortState::initial`] when `raw` is absent or names a
	/// key that no sortable column has.
	pub fn from_query<R, Q>(columns: &ColumnSet<R, Q>, raw: Option<&str>) -> Self {
		let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
			return Self::initial(columns);
		};
		let (direction, key) = SortDirection::parse_from_query(raw);
		if columns.sortable(key).is_some() {
			Self::active(key, direction)
		} else {
			tracing::debug!(sort = raw, "ignoring unknown sort key from query");
			Self::initial(columns)
		}
	}
}
