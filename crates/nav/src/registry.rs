//! Static service registry and the allow-list derived from it.

use indexmap::IndexMap;
use url::Url;

/// Mapping from logical service name to its base URL.
///
/// Built once at process startup from deployment configuration and immutable
/// afterwards. Development deployments use distinct local ports, production
/// uses distinct subdomains of one base domain.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
	services: IndexMap<String, Url>,
	base_domain: Option<String>,
}

impl ServiceRegistry {
	/// Build a registry from `(name, base URL)` pairs, preserving order.
	pub fn new<I, S>(services: I) -> Self
	where
		I: IntoIterator<Item = (S, Url)>,
		S: Into<String>,
	{
		Self {
			services: services
				.into_iter()
				.map(|(name, url)| (name.into(), url))
				.collect(),
			base_domain: None,
		}
	}

	/// Record the deployment's apex domain (e.g. `tekbreed.com`), trusted
	/// alongside the individual service hosts.
	pub fn with_base_domain(mut self, domain: impl Into<String>) -> Self {
		self.base_domain = Some(domain.into().to_ascii_lowercase());
		self
	}

	/// The base URL of a service, by logical name.
	pub fn base_url(&self, service: &str) -> Option<&Url> {
		self.services.get(service)
	}

	/// The deployment's apex domain, when configured.
	pub fn base_domain(&self) -> Option<&str> {
		self.base_domain.as_deref()
	}

	/// Number of registered services.
	pub fn len(&self) -> usize {
		self.services.len()
	}

	/// Whether no services are registered.
	pub fn is_empty(&self) -> bool {
		self.services.is_empty()
	}

	/// Iterate services in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Url)> {
		self.services.iter().map(|(name, url)| (name.as_str(), url))
	}

	/// Build an absolute URL on another service.
	///
	/// `path` is joined onto the service's base URL; returns `None` for an
	/// unknown service or a path that cannot be joined.
	pub fn service_url(&self, service: &str, path: &str) -> Option<Url> {
		self.services.get(service)?.join(path).ok()
	}

	/// Hostnames trusted as redirect targets: every service host plus the
	/// base domain when one is set.
	pub fn allowed_domains(&self) -> AllowedDomains {
		let mut entries = Vec::new();
		if let Some(domain) = &self.base_domain {
			entries.push(domain.clone());
		}
		for url in self.services.values() {
			if let Some(host) = url.host_str() {
				let host = host.to_ascii_lowercase();
				if !entries.contains(&host) {
					entries.push(host);
				}
			}
		}
		AllowedDomains { entries }
	}
}

/// Hostnames considered part of the trusted deployment.
///
/// Used only for validating caller-supplied redirect targets; navigation mode
/// is decided by origin comparison alone. An empty set rejects every absolute
/// candidate while same-site relative paths remain allowed.
#[derive(Debug, Clone, Default)]
pub struct AllowedDomains {
	entries: Vec<String>,
}

impl AllowedDomains {
	/// Build an allow-list from hostname entries.
	pub fn new<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			entries: entries
				.into_iter()
				.map(|e| e.into().to_ascii_lowercase())
				.collect(),
		}
	}

	/// Whether no hostnames are allowed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether `host` equals an entry or is a strict subdomain of one.
	///
	/// Matching is suffix-based on label boundaries: `chat.tekbreed.com`
	/// matches the entry `tekbreed.com`, `eviltekbreed.com` does not.
	pub fn allows_host(&self, host: &str) -> bool {
		let host = host.to_ascii_lowercase();
		self.entries.iter().any(|entry| {
			host == *entry
				|| host
					.strip_suffix(entry.as_str())
					.is_some_and(|rest| rest.ends_with('.'))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registry() -> ServiceRegistry {
		ServiceRegistry::new([
			("web", Url::parse("https://tekbreed.com").unwrap()),
			("chat", Url::parse("https://chat.tekbreed.com").unwrap()),
			("admin", Url::parse("https://admin.tekbreed.com").unwrap()),
		])
		.with_base_domain("tekbreed.com")
	}

	#[test]
	fn lookup_by_logical_name() {
		let registry = registry();
		assert_eq!(
			registry.base_url("chat").unwrap().as_str(),
			"https://chat.tekbreed.com/"
		);
		assert!(registry.base_url("mail").is_none());
	}

	#[test]
	fn service_url_joins_paths() {
		let registry = registry();
		assert_eq!(
			registry.service_url("chat", "/support?topic=billing").unwrap().as_str(),
			"https://chat.tekbreed.com/support?topic=billing"
		);
		assert!(registry.service_url("mail", "/x").is_none());
	}

	#[test]
	fn iteration_preserves_declaration_order() {
		let names: Vec<_> = registry().iter().map(|(name, _)| name.to_string()).collect();
		assert_eq!(names, ["web", "chat", "admin"]);
	}

	#[test]
	fn allowed_domains_cover_hosts_and_base_domain() {
		let allowed = registry().allowed_domains();
		assert!(allowed.allows_host("tekbreed.com"));
		assert!(allowed.allows_host("chat.tekbreed.com"));
		// Strict subdomain of the base domain, not itself a service host.
		assert!(allowed.allows_host("docs.tekbreed.com"));
		assert!(!allowed.allows_host("tekbreed.com.evil.example"));
	}

	#[test]
	fn subdomain_matching_respects_label_boundaries() {
		let allowed = AllowedDomains::new(["tekbreed.com"]);
		assert!(allowed.allows_host("a.b.tekbreed.com"));
		assert!(!allowed.allows_host("eviltekbreed.com"));
		assert!(!allowed.allows_host("tekbreed.com.evil.example"));
	}

	#[test]
	fn matching_is_case_insensitive() {
		let allowed = AllowedDomains::new(["TekBreed.com"]);
		assert!(allowed.allows_host("Chat.TEKBREED.com"));
	}

	#[test]
	fn empty_allow_list_allows_nothing() {
		let allowed = AllowedDomains::default();
		assert!(allowed.is_empty());
		assert!(!allowed.allows_host("tekbreed.com"));
	}

	#[test]
	fn dev_registry_uses_local_ports() {
		let registry = ServiceRegistry::new([
			("web", Url::parse("http://localhost:5173").unwrap()),
			("chat", Url::parse("http://localhost:5174").unwrap()),
		]);
		assert_eq!(
			registry.service_url("chat", "/support").unwrap().as_str(),
			"http://localhost:5174/support"
		);
		let allowed = registry.allowed_domains();
		// Both services share one host entry.
		assert!(allowed.allows_host("localhost"));
	}
}
