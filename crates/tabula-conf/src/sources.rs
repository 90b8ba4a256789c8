//! Configuration sources for layered settings
//!
//! Provides different sources of configuration that can be merged together
//! in priority order (environment variables > config files > defaults).

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Separator for nested keys in environment variable names
///
/// `TABULA_ICON__SORT` sets `icon.sort`.
pub const NESTING_SEPARATOR: &str = "__";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	/// File could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Content has an unexpected shape
	#[error("Parse error: {0}")]
	Parse(String),

	/// Invalid TOML
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Invalid JSON
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Source cannot be created
	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Environment variable configuration source
///
/// Values are kept as strings; typed settings parse the ones they need.
pub struct EnvSource {
	prefix: Option<String>,
}

impl EnvSource {
	/// Create a new environment variable configuration source
	///
	/// # Examples
	///
	/// ```
	/// use tabula_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new();
	/// ```
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix filter for environment variables
	///
	/// The prefix is stripped from the resulting keys.
	///
	/// # Examples
	///
	/// ```
	/// use tabula_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("TABULA_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = Map::new();

		for (key, value) in std::env::vars() {
			let clean_key = match &self.prefix {
				Some(prefix) => match key.strip_prefix(prefix.as_str()) {
					Some(stripped) => stripped,
					None => continue,
				},
				None => key.as_str(),
			};
			if clean_key.is_empty() {
				continue;
			}

			let path: Vec<String> = clean_key
				.to_lowercase()
				.split(NESTING_SEPARATOR)
				.map(str::to_string)
				.collect();
			insert_nested(&mut config, &path, Value::String(value));
		}

		Ok(config.into_iter().collect())
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

fn insert_nested(map: &mut Map<String, Value>, path: &[String], value: Value) {
	match path {
		[] => {}
		[last] => {
			map.insert(last.clone(), value);
		}
		[first, rest @ ..] => {
			let entry = map
				.entry(first.clone())
				.or_insert_with(|| Value::Object(Map::new()));
			if !entry.is_object() {
				*entry = Value::Object(Map::new());
			}
			if let Value::Object(child) = entry {
				insert_nested(child, rest, value);
			}
		}
	}
}

/// TOML file configuration source
///
/// A missing file yields no values.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use tabula_conf::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::new("tabula.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;
		let json_value = serde_json::to_value(toml_value)?;

		object_to_map(json_value)
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// JSON file configuration source
///
/// A missing file yields no values.
pub struct JsonFileSource {
	path: PathBuf,
}

impl JsonFileSource {
	/// Create a new JSON file configuration source
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let json_value: Value = serde_json::from_str(&content)?;

		object_to_map(json_value)
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

fn object_to_map(value: Value) -> Result<IndexMap<String, Value>, SourceError> {
	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(SourceError::Parse("Expected object at root".to_string())),
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create a new default values configuration source
	///
	/// # Examples
	///
	/// ```
	/// use tabula_conf::sources::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("per_page", Value::Number(50.into()));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Add a default value for a configuration key
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// Auto-detect configuration source based on file extension
pub fn auto_source(path: impl AsRef<Path>) -> Result<Box<dyn ConfigSource>, SourceError> {
	let path = path.as_ref();
	let ext = path
		.extension()
		.and_then(|e| e.to_str())
		.ok_or_else(|| SourceError::InvalidSource("No file extension".to_string()))?;

	match ext {
		"toml" => Ok(Box::new(TomlFileSource::new(path))),
		"json" => Ok(Box::new(JsonFileSource::new(path))),
		_ => Err(SourceError::InvalidSource(format!(
			"Unsupported file extension: {}",
			ext
		))),
	}
}
