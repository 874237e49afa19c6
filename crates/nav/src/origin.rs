//! Typed origin extraction and comparison.

use std::fmt;
use std::net::Ipv4Addr;

use url::Url;

/// The (scheme, host, port) tuple identifying a navigation boundary.
///
/// Two URLs share an origin only if all three components match. The port is
/// the effective port: the explicit one when present, otherwise the scheme
/// default, so `https://a.example` and `https://a.example:443` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
	scheme: String,
	host: String,
	port: Option<u16>,
}

impl Origin {
	/// Extract the origin of a URL.
	///
	/// Returns `None` for URLs without a host (`mailto:`, `data:`, ...),
	/// which have no meaningful navigation boundary.
	pub fn of(url: &Url) -> Option<Self> {
		let host = url.host_str()?;
		Some(Self {
			scheme: url.scheme().to_ascii_lowercase(),
			host: host.to_ascii_lowercase(),
			port: url.port_or_known_default(),
		})
	}

	/// The URL scheme, lowercased.
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// The hostname, lowercased. IPv6 addresses keep their brackets.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// The effective port, when the scheme has one.
	pub fn port(&self) -> Option<u16> {
		self.port
	}

	/// Whether this origin points at the local machine.
	///
	/// Recognizes `localhost`, `*.localhost`, IPv4 loopback addresses, and
	/// `[::1]`.
	pub fn is_loopback(&self) -> bool {
		let host = self.host.as_str();
		host == "localhost"
			|| host.ends_with(".localhost")
			|| host == "[::1]"
			|| host
				.parse::<Ipv4Addr>()
				.is_ok_and(|ip| ip.is_loopback())
	}
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}://{}", self.scheme, self.host)?;
		if let Some(port) = self.port {
			write!(f, ":{port}")?;
		}
		Ok(())
	}
}
