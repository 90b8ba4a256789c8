//! Table settings and configuration sources.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tabula::conf::TableSettings;
//!
//! // tabula.toml, then TABULA_* environment variables
//! let settings = TableSettings::load("tabula.toml").unwrap();
//! println!("{} rows per page", settings.per_page);
//! ```

pub use tabula_conf::*;
