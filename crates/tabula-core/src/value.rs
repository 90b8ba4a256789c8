//! Dynamically typed cell values

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single cell value read from a row
///
/// Values are totally ordered so that rows can be sorted by any field:
/// `Null` sorts first, then booleans, then numbers, then text. Integers and
/// floats compare numerically with each other, so `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
	/// Missing value
	#[default]
	Null,
	/// Boolean value
	Bool(bool),
	/// Integer value
	Int(i64),
	/// Floating point value
	Float(f64),
	/// Text value
	Text(String),
}

impl CellValue {
	/// Returns true if this value is [`CellValue::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	fn rank(&self) -> u8 {
		match self {
			Self::Null => 0,
			Self::Bool(_) => 1,
			Self::Int(_) | Self::Float(_) => 2,
			Self::Text(_) => 3,
		}
	}
}

impl Ord for CellValue {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Null, Self::Null) => Ordering::Equal,
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Int(a), Self::Int(b)) => a.cmp(b),
			(Self::Float(a), Self::Float(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
			(Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
			(Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).reverse(),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

/// Compares an integer with a float exactly
///
/// Casting the integer would round it above 2^53 and break transitivity with
/// `Int` vs `Int`. NaNs sort like `f64::total_cmp`: positive NaN above every
/// number, negative NaN below.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
	// -2^63, exactly representable
	const MIN: f64 = i64::MIN as f64;

	if float.is_nan() {
		return if float.is_sign_negative() {
			Ordering::Greater
		} else {
			Ordering::Less
		};
	}
	if float >= -MIN {
		return Ordering::Less;
	}
	if float < MIN {
		return Ordering::Greater;
	}

	let whole = float.trunc();
	match int.cmp(&(whole as i64)) {
		Ordering::Equal => whole.partial_cmp(&float).unwrap_or(Ordering::Equal),
		ordering => ordering,
	}
}

impl PartialOrd for CellValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for CellValue {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for CellValue {}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(b) => write!(f, "{}", b),
			Self::Int(n) => write!(f, "{}", n),
			Self::Float(n) => write!(f, "{}", n),
			Self::Text(s) => f.write_str(s),
		}
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for CellValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for CellValue {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}

impl From<usize> for CellValue {
	fn from(value: usize) -> Self {
		match i64::try_from(value) {
			Ok(n) => Self::Int(n),
			Err(_) => Self::Float(value as f64),
		}
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
