//! Error types for navigation input construction.

use thiserror::Error;

/// Errors that can occur when building navigation inputs.
///
/// Expected input variation never surfaces here: malformed destinations and
/// hostile redirect candidates produce fail-safe decisions instead of errors.
/// These variants indicate caller misuse and fail fast during development.
#[derive(Debug, Error)]
pub enum NavError {
	/// The current-location URL could not be turned into an origin.
	#[error("invalid navigation context {url:?}: {reason}")]
	InvalidContext {
		/// The URL the context was built from.
		url: String,
		/// Why it was rejected.
		reason: String,
	},
}

/// Result type for navigation input construction.
pub type Result<T> = std::result::Result<T, NavError>;
