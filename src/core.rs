//! Core types shared by every tabula crate.
//!
//! # Examples
//!
//! ```rust
//! use tabula::core::SortDirection;
//! use tabula::core::text::snake_case;
//!
//! assert_eq!(snake_case("Companies count"), "companies_count");
//! assert_eq!(SortDirection::parse_from_query("-name"), (SortDirection::Descending, "name"));
//! ```

pub use tabula_core::*;
