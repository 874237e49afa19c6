//! Error types for registry configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading the service registry.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A required node is missing from the document.
	#[error("missing required node: {0}")]
	MissingNode(String),

	/// A service node is missing its base URL argument.
	#[error("missing base URL for service: {0}")]
	MissingField(String),

	/// A service base URL could not be parsed.
	#[error("invalid base URL for service '{service}': {error}")]
	InvalidUrl {
		/// The service whose URL was rejected.
		service: String,
		/// The underlying parse error.
		error: url::ParseError,
	},

	/// The requested environment has no block in the document.
	#[error("no '{0}' block under registry")]
	UnknownEnvironment(String),

	/// An environment block declares no services.
	#[error("environment '{0}' declares no services")]
	EmptyEnvironment(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
