//! Core types for tabula
//!
//! This crate holds the small vocabulary every other tabula crate speaks:
//!
//! - [`SortDirection`]: ascending or descending ordering
//! - [`CellValue`]: a dynamically typed, totally ordered cell value
//! - [`Record`]: field access for row types, used for default formatting and
//!   default ordering
//! - [`text::snake_case`]: derives column attributes from header labels

#![warn(missing_docs)]

pub mod record;
pub mod sort;
pub mod text;
pub mod value;

pub use record::Record;
pub use sort::SortDirection;
pub use value::CellValue;
