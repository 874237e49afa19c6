//! Service registry configuration for Waypoint.
//!
//! The registry is written in KDL (v2) format. A single document declares
//! one block per deployment environment; each child node maps a logical
//! service name to its base URL:
//!
//! ```kdl
//! registry {
//!     production base-domain="tekbreed.com" {
//!         web "https://tekbreed.com"
//!         chat "https://chat.tekbreed.com"
//!         admin "https://admin.tekbreed.com"
//!     }
//!     development {
//!         web "http://localhost:5173"
//!         chat "http://localhost:5174"
//!         admin "http://localhost:5175"
//!     }
//! }
//! ```
//!
//! The document is read once at process startup; the resulting
//! [`ServiceRegistry`] is immutable for the lifetime of the process and is
//! not dynamically reloadable. The optional `base-domain` property widens
//! the derived redirect allow-list to every subdomain of the deployment's
//! apex domain.

pub mod error;

use std::path::Path;
use std::str::FromStr;

use url::Url;
use waypoint_nav::ServiceRegistry;

pub use error::{ConfigError, Result};

/// Deployment environment selecting which registry block applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
	/// Sibling applications on distinct local ports.
	#[default]
	Development,
	/// Sibling applications on distinct subdomains of one base domain.
	Production,
}

impl Environment {
	fn node_name(self) -> &'static str {
		match self {
			Self::Development => "development",
			Self::Production => "production",
		}
	}
}

impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"development" | "dev" => Ok(Self::Development),
			"production" | "prod" => Ok(Self::Production),
			other => Err(ConfigError::UnknownEnvironment(other.to_string())),
		}
	}
}

/// Parse a KDL registry document for the given environment.
pub fn parse(input: &str, environment: Environment) -> Result<ServiceRegistry> {
	let doc: kdl::KdlDocument = input.parse()?;
	let registry = doc
		.get("registry")
		.and_then(|node| node.children())
		.ok_or_else(|| ConfigError::MissingNode("registry".into()))?;

	let env_name = environment.node_name();
	let env_node = registry
		.get(env_name)
		.ok_or_else(|| ConfigError::UnknownEnvironment(env_name.to_string()))?;

	let mut services = Vec::new();
	if let Some(body) = env_node.children() {
		for node in body.nodes() {
			let name = node.name().value().to_string();
			let value = node
				.get(0)
				.and_then(|v| v.as_string())
				.ok_or_else(|| ConfigError::MissingField(name.clone()))?;
			let url = Url::parse(value).map_err(|error| ConfigError::InvalidUrl {
				service: name.clone(),
				error,
			})?;
			services.push((name, url));
		}
	}

	if services.is_empty() {
		return Err(ConfigError::EmptyEnvironment(env_name.to_string()));
	}

	let mut registry = ServiceRegistry::new(services);
	if let Some(domain) = env_node.get("base-domain").and_then(|v| v.as_string()) {
		registry = registry.with_base_domain(domain);
	}
	Ok(registry)
}

/// Load the registry from a file.
pub fn load(path: impl AsRef<Path>, environment: Environment) -> Result<ServiceRegistry> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
		path: path.to_path_buf(),
		error: e,
	})?;
	parse(&content, environment)
}
