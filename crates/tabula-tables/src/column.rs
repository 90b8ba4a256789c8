//! Column definitions

use std::fmt;
use std::sync::Arc;
use tabula_core::text::snake_case;
use tabula_core::{Record, SortDirection};
use tabula_query::{MemoryQuery, SortFn};

/// Formats a row into the text of one cell
pub type Formatter<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// A table column
///
/// A column is identified by its attribute, derived from the label in snake
/// case (`"Companies count"` becomes `companies_count`). The attribute is the
/// field displayed when no formatter is set and the sort key when the column
/// is sortable.
///
/// `R` is the row type and `Q` the query type of the adapter the table reads
/// from; `Q` only matters for columns with a custom sort.
///
/// # Example
///
/// ```rust
/// use tabula_core::SortDirection;
/// use tabula_tables::Column;
///
/// struct User {
///     name: String,
/// }
///
/// let column: Column<User> = Column::new("Display name")
///     .format(|user: &User| user.name.to_uppercase())
///     .sort_by_default(SortDirection::Descending);
///
/// assert_eq!(column.field(), "display_name");
/// assert_eq!(column.sort_key(), Some("display_name"));
/// assert_eq!(column.default_sort(), Some(SortDirection::Descending));
/// ```
pub struct Column<R, Q = MemoryQuery<R>> {
	label: String,
	field: String,
	sortable: bool,
	custom_sort: Option<SortFn<Q>>,
	default_sort: Option<SortDirection>,
	formatter: Option<Formatter<R>>,
	css_classes: String,
}

impl<R, Q> Column<R, Q> {
	/// Creates a plain column: not sortable, displaying the attribute derived
	/// from `label`
	pub fn new(label: impl Into<String>) -> Self {
		let label = label.into();
		let field = snake_case(&label);
		Self {
			label,
			field,
			sortable: false,
			custom_sort: None,
			default_sort: None,
			formatter: None,
			css_classes: String::new(),
		}
	}

	/// Overrides the attribute derived from the label
	pub fn attribute(mut self, field: impl Into<String>) -> Self {
		self.field = field.into();
		self
	}

	/// Makes the column sortable by its attribute
	pub fn sortable(mut self) -> Self {
		self.sortable = true;
		self
	}

	/// Makes the column sortable with a custom strategy
	///
	/// The strategy receives the query and the requested direction, and is
	/// used instead of ordering by the attribute.
	pub fn sortable_using<F>(mut self, sort: F) -> Self
	where
		F: Fn(Q, SortDirection) -> Q + Send + Sync + 'static,
	{
		self.sortable = true;
		self.custom_sort = Some(Arc::new(sort));
		self
	}

	/// Sorts the table by this column until the user picks another one
	///
	/// Implies [`Column::sortable`] when no sort strategy is set yet.
	pub fn sort_by_default(mut self, direction: SortDirection) -> Self {
		self.sortable = true;
		self.default_sort = Some(direction);
		self
	}

	/// Sets the cell formatter
	pub fn format<F>(mut self, formatter: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		self.formatter = Some(Arc::new(formatter));
		self
	}

	/// Sets CSS classes added to the cells of this column
	pub fn css_classes(mut self, css_classes: impl Into<String>) -> Self {
		self.css_classes = css_classes.into();
		self
	}

	/// Returns the header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the attribute
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Returns the sort key, or `None` for columns that cannot be sorted
	pub fn sort_key(&self) -> Option<&str> {
		self.sortable.then_some(self.field.as_str())
	}

	/// Returns true if the column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns the custom sort strategy, if any
	pub fn custom_sort(&self) -> Option<&SortFn<Q>> {
		self.custom_sort.as_ref()
	}

	/// Returns the default sort direction, if the column is sorted by default
	pub fn default_sort(&self) -> Option<SortDirection> {
		self.default_sort
	}

	/// Returns true if a formatter is set
	pub fn has_formatter(&self) -> bool {
		self.formatter.is_some()
	}

	/// Returns the CSS classes of the cells
	pub fn css_class(&self) -> &str {
		&self.css_classes
	}

	/// Formats the cell of `row`
	///
	/// Uses the formatter when set, else the row's attribute value; a missing
	/// or null value renders as an empty string.
	pub fn format_value(&self, row: &R) -> String
	where
		R: Record,
	{
		match &self.formatter {
			Some(formatter) => formatter(row),
			None => row
				.value(&self.field)
				.filter(|value| !value.is_null())
				.map(|value| value.to_string())
				.unwrap_or_default(),
		}
	}
}

impl<R, Q> Clone for Column<R, Q> {
	fn clone(&self) -> Self {
		Self {
			label: self.label.clone(),
			field: self.field.clone(),
			sortable: self.sortable,
			custom_sort: self.custom_sort.clone(),
			default_sort: self.default_sort,
			formatter: self.formatter.clone(),
			css_classes: self.css_classes.clone(),
		}
	}
}

impl<R, Q> fmt::Debug for Column<R, Q> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("label", &self.label)
			.field("field", &self.field)
			.field("sortable", &self.sortable)
			.field("custom_sort", &self.custom_sort.is_some())
			.field("default_sort", &self.default_sort)
			.field("formatter", &self.formatter.is_some())
			.field("css_classes", &self.css_classes)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tabula_core::CellValue;

	#[derive(Debug)]
	struct TestRow {
		name: String,
		nickname: Option<String>,
	}

	impl Record for TestRow {
		fn fields() -> &'static [&'static str] {
			&["name", "nickname"]
		}

		fn value(&self, field: &str) -> Option<CellValue> {
			match field {
				"name" => Some(self.name.as_str().into()),
				"nickname" => Some(self.nickname.clone().into()),
				_ => None,
			}
		}
	}

	fn row() -> TestRow {
		TestRow {
			name: "Alice <admin>".to_string(),
			nickname: None,
		}
	}

	#[rstest]
	fn test_plain_column() {
		let column: Column<TestRow> = Column::new("Name");
		assert_eq!(column.label(), "Name");
		assert_eq!(column.field(), "name");
		assert!(!column.is_sortable());
		assert_eq!(column.sort_key(), None);
		assert_eq!(column.default_sort(), None);
		assert!(!column.has_formatter());
	}

	#[rstest]
	fn test_attribute_override() {
		let column: Column<TestRow> = Column::new("Full name").attribute("name").sortable();
		assert_eq!(column.field(), "name");
		assert_eq!(column.sort_key(), Some("name"));
	}

	#[rstest]
	#[case(SortDirection::Ascending)]
	#[case(SortDirection::Descending)]
	fn test_sort_by_default_implies_sortable(#[case] direction: SortDirection) {
		let column: Column<TestRow> = Column::new("Name").sort_by_default(direction);
		assert!(column.is_sortable());
		assert_eq!(column.default_sort(), Some(direction));
		assert!(column.custom_sort().is_none());
	}

	#[rstest]
	fn test_sortable_using_stores_strategy() {
		let column: Column<TestRow, Vec<&'static str>> =
			Column::new("Companies count").sortable_using(|mut query: Vec<&'static str>, _| {
				query.push("companies_count");
				query
			});

		let sort = column.custom_sort().unwrap();
		assert_eq!(sort(Vec::new(), SortDirection::Ascending), vec!["companies_count"]);
		assert_eq!(column.sort_key(), Some("companies_count"));
	}

	#[rstest]
	fn test_format_value_uses_attribute() {
		let column: Column<TestRow> = Column::new("Name");
		// Escaping belongs to the theme
		assert_eq!(column.format_value(&row()), "Alice <admin>");
	}

	#[rstest]
	fn test_format_value_null_is_empty() {
		let column: Column<TestRow> = Column::new("Nickname");
		assert_eq!(column.format_value(&row()), "");
	}

	#[rstest]
	fn test_formatter_wins_over_attribute() {
		let column: Column<TestRow> =
			Column::new("Name").format(|row: &TestRow| row.name.len().to_string());
		assert!(column.has_formatter());
		assert_eq!(column.format_value(&row()), "13");
	}

	#[rstest]
	fn test_debug_hides_closures() {
		let column: Column<TestRow> = Column::new("Name").css_classes("text-end");
		let debug = format!("{:?}", column);
		assert!(debug.contains("\"name\""));
		assert!(debug.contains("formatter: false"));
		assert_eq!(column.css_class(), "text-end");
	}
}
