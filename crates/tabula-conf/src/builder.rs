//! Settings builder merging configuration sources by priority

use crate::sources::{ConfigSource, SourceError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Errors raised while assembling settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// A source failed to load
	#[error("failed to load {source_name}: {error}")]
	Source {
		/// Description of the failing source
		source_name: String,
		/// Underlying error
		#[source]
		error: SourceError,
	},

	/// The merged values do not fit the settings type
	#[error("invalid settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	/// The settings deserialized but hold unusable values
	#[error("invalid settings: {0}")]
	Invalid(String),
}

/// Builds a settings value from layered [`ConfigSource`]s
///
/// Sources are merged from lowest to highest priority. Nested objects are
/// merged key by key, so an environment variable overriding `icon.sort`
/// keeps `icon.sort_asc` from a config file.
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder with no sources
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Adds a configuration source
	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Adds an already boxed configuration source
	pub fn add_boxed_source(mut self, source: Box<dyn ConfigSource>) -> Self {
		self.sources.push(source);
		self
	}

	/// Loads and merges every source into a single JSON object
	pub fn merged(&self) -> Result<Value, SettingsError> {
		let mut sources: Vec<&dyn ConfigSource> =
			self.sources.iter().map(|source| source.as_ref()).collect();
		// Stable, so equal priorities keep insertion order
		sources.sort_by_key(|source| source.priority());

		let mut merged = Map::new();
		for source in sources {
			let values = source.load().map_err(|error| SettingsError::Source {
				source_name: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded settings source"
			);
			for (key, value) in values {
				merge_value(&mut merged, key, value);
			}
		}

		Ok(Value::Object(merged))
	}

	/// Merges every source and deserializes the result
	pub fn build<T: DeserializeOwned>(self) -> Result<T, SettingsError> {
		let merged = self.merged()?;
		Ok(serde_json::from_value(merged)?)
	}
}

impl Default for SettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn merge_value(target: &mut Map<String, Value>, key: String, value: Value) {
	let Value::Object(incoming) = value else {
		target.insert(key, value);
		return;
	};
	if let Some(Value::Object(existing)) = target.get_mut(&key) {
		for (k, v) in incoming {
			merge_value(existing, k, v);
		}
		return;
	}
	target.insert(key, Value::Object(incoming));
}
