use thiserror::Error;

/// Errors raised by query adapters
#[derive(Debug, Error)]
pub enum QueryError {
	/// The data source rejected or failed to run the query
	#[error("Query execution failed: {0}")]
	Execution(String),

	/// A row returned by the data source could not be decoded
	#[error("Row decoding failed: {0}")]
	Decode(String),

	/// A count did not fit in `usize`
	#[error("Row count out of range: {0}")]
	CountOutOfRange(u64),
}

/// Result type for query operations
pub type Result<T> = std::result::Result<T, QueryError>;
