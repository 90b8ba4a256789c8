//! # Tabula settings
//!
//! Configuration for table rendering: sort icons, sort link titles, the HTML
//! theme, the empty-table message and paging defaults.
//!
//! Settings are assembled from layered sources merged in priority order
//! (environment variables > config files > defaults):
//!
//! ```rust,no_run
//! use tabula_conf::builder::SettingsBuilder;
//! use tabula_conf::sources::{EnvSource, TomlFileSource};
//! use tabula_conf::TableSettings;
//!
//! let settings: TableSettings = SettingsBuilder::new()
//!     .add_source(TomlFileSource::new("tabula.toml"))
//!     .add_source(EnvSource::new().with_prefix("TABULA_"))
//!     .build()
//!     .unwrap();
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod settings;
pub mod sources;

pub use builder::{SettingsBuilder, SettingsError};
pub use settings::{IconSettings, TableSettings, ThemeKind, TitleSettings};
pub use sources::{ConfigSource, SourceError};
