//! Sort direction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the direction matching an `ascending` flag
	pub fn from_ascending(ascending: bool) -> Self {
		if ascending {
			Self::Ascending
		} else {
			Self::Descending
		}
	}

	/// Returns true for [`SortDirection::Ascending`]
	pub fn is_ascending(&self) -> bool {
		matches!(self, Self::Ascending)
	}

	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Parses a sort direction from a query parameter
	///
	/// Returns `Ascending` for plain values and `Descending` for values with a
	/// leading minus (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}

	/// Formats a field as a query parameter, the inverse of
	/// [`SortDirection::parse_from_query`]
	pub fn to_query(&self, field: &str) -> String {
		match self {
			Self::Ascending => field.to_string(),
			Self::Descending => format!("-{}", field),
		}
	}

	/// Applies this direction to an ascending comparison result
	pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ascending => f.write_str("asc"),
			Self::Descending => f.write_str("desc"),
		}
	}
}
