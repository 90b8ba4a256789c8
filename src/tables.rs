//! Columns, sort state, rendering and the table component.

pub use tabula_tables::*;
