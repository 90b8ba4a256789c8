//! Field access for row types

use crate::value::CellValue;

/// A row type whose fields can be read by name
///
/// Columns without an explicit formatter display `value(attribute)`, and
/// sortable columns without a custom sort function order by it. The list
/// returned by [`Record::fields`] lets column sets validate both at build
/// time instead of at render time.
///
/// # Example
///
/// ```rust
/// use tabula_core::{CellValue, Record};
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
/// let user = User { id: 1, name: "Alice".to_string() };
/// assert_eq!(user.value("name"), Some(CellValue::from("Alice")));
/// assert!(User::has_field("id"));
/// ```
pub trait Record {
	/// Names of the fields exposed through [`Record::value`]
	fn fields() -> &'static [&'static str];

	/// Returns the value of `field`, or `None` if the row has no such field
	fn value(&self, field: &str) -> Option<CellValue>;

	/// Returns true if `field` is one of [`Record::fields`]
	fn has_field(field: &str) -> bool {
		Self::fields().contains(&field)
	}
}
