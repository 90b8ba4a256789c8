//! Table settings

use crate::builder::{SettingsBuilder, SettingsError};
use crate::sources::{EnvSource, TomlFileSource};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Prefix for environment variables read by [`TableSettings::load`]
pub const ENV_PREFIX: &str = "TABULA_";

/// Settings consumed by the table renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Icons shown in sortable column headers
	pub icon: IconSettings,

	/// Titles of the sort links
	pub title: TitleSettings,

	/// HTML theme used by `render_html`
	pub theme: ThemeKind,

	/// Message shown in place of rows when the page is empty
	pub empty_message: String,

	/// Default number of rows per page
	#[serde(deserialize_with = "page_size")]
	pub per_page: usize,

	/// Query string parameter carrying the sort (`?sort=-name`)
	pub sort_param: String,

	/// Query string parameter carrying the page number
	pub page_param: String,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			icon: IconSettings::default(),
			title: TitleSettings::default(),
			theme: ThemeKind::default(),
			empty_message: "No results were found.".to_string(),
			per_page: 20,
			sort_param: "sort".to_string(),
			page_param: "page".to_string(),
		}
	}
}

impl TableSettings {
	/// Loads settings from `config_path` (TOML, optional) and `TABULA_*`
	/// environment variables, on top of the defaults
	pub fn load(config_path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let settings: Self = SettingsBuilder::new()
			.add_source(TomlFileSource::new(config_path.as_ref()))
			.add_source(EnvSource::new().with_prefix(ENV_PREFIX))
			.build()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks values that deserialize fine but cannot be rendered
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.per_page == 0 {
			return Err(SettingsError::Invalid(
				"per_page must be at least 1".to_string(),
			));
		}
		if self.sort_param.is_empty() || self.page_param.is_empty() {
			return Err(SettingsError::Invalid(
				"query parameter names cannot be empty".to_string(),
			));
		}
		if self.sort_param == self.page_param {
			return Err(SettingsError::Invalid(format!(
				"sort_param and page_param are both '{}'",
				self.sort_param
			)));
		}
		Ok(())
	}
}

/// Reads `per_page` from a number, or from the string an environment variable
/// carries
fn page_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum PageSize {
		Number(usize),
		Text(String),
	}

	match PageSize::deserialize(deserializer)? {
		PageSize::Number(size) => Ok(size),
		PageSize::Text(text) => text
			.trim()
			.parse()
			.map_err(|_| de::Error::invalid_value(Unexpected::Str(&text), &"a page size")),
	}
}

/// Sort icons, as trusted HTML snippets
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
	/// Icon of a sortable column that is not the active sort
	pub sort: String,
	/// Icon inviting an ascending sort (active column sorted descending)
	pub sort_asc: String,
	/// Icon inviting a descending sort (active column sorted ascending)
	pub sort_desc: String,
}

impl Default for IconSettings {
	fn default() -> Self {
		Self {
			sort: r#"<i class="fa-solid fa-sort fa-fw"></i>"#.to_string(),
			sort_asc: r#"<i class="fa-solid fa-sort-up fa-fw"></i>"#.to_string(),
			sort_desc: r#"<i class="fa-solid fa-sort-down fa-fw"></i>"#.to_string(),
		}
	}
}

/// Titles of the sort links
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSettings {
	/// Title of a link that sorts ascending
	pub sort_asc: String,
	/// Title of a link that sorts descending
	pub sort_desc: String,
}

impl Default for TitleSettings {
	fn default() -> Self {
		Self {
			sort_asc: "Sort ascending".to_string(),
			sort_desc: "Sort descending".to_string(),
		}
	}
}

/// HTML theme selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
	/// Bootstrap 5 markup
	#[default]
	Bootstrap5,
	/// Markup without CSS framework classes
	Plain,
}
