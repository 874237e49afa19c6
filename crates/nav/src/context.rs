//! Read-only snapshot of the current location.

use url::Url;

use crate::error::{NavError, Result};
use crate::origin::Origin;

/// The current request/location at the moment a navigation is decided.
///
/// One snapshot is taken per decision; the resolver never mutates it. On the
/// server it is built from the incoming request's URL, on the client from the
/// equivalent of `window.location`.
#[derive(Debug, Clone)]
pub struct NavigationContext {
	/// Origin root URL (`scheme://host:port/`), absent for a detached
	/// context.
	base: Option<Url>,
	pathname: String,
	search: String,
	hash: String,
}

impl NavigationContext {
	/// Build a context from the incoming request's full URL (server side).
	///
	/// The URL must be absolute and carry a host; anything else is caller
	/// misuse and fails fast.
	pub fn from_request_url(request_url: &str) -> Result<Self> {
		let url = Url::parse(request_url).map_err(|e| NavError::InvalidContext {
			url: request_url.to_string(),
			reason: e.to_string(),
		})?;
		if url.host_str().is_none() {
			return Err(NavError::InvalidContext {
				url: request_url.to_string(),
				reason: "URL has no host".into(),
			});
		}

		let pathname = url.path().to_string();
		let search = url.query().map(|q| format!("?{q}")).unwrap_or_default();
		let hash = url.fragment().map(|f| format!("#{f}")).unwrap_or_default();

		let mut base = url;
		base.set_path("/");
		base.set_query(None);
		base.set_fragment(None);

		Ok(Self {
			base: Some(base),
			pathname,
			search,
			hash,
		})
	}

	/// Build a context from already-split location parts (client side).
	///
	/// `search` and `hash` may be passed with or without their leading `?`
	/// and `#`.
	pub fn new(origin: &str, pathname: &str, search: &str, hash: &str) -> Result<Self> {
		let base = Url::parse(origin).map_err(|e| NavError::InvalidContext {
			url: origin.to_string(),
			reason: e.to_string(),
		})?;
		if base.host_str().is_none() {
			return Err(NavError::InvalidContext {
				url: origin.to_string(),
				reason: "origin has no host".into(),
			});
		}

		let pathname = if pathname.is_empty() {
			"/".to_string()
		} else {
			pathname.to_string()
		};

		Ok(Self {
			base: Some(base),
			pathname,
			search: with_prefix(search, '?'),
			hash: with_prefix(hash, '#'),
		})
	}

	/// A context with no origin information yet.
	///
	/// Every destination resolves to an internal navigation under a detached
	/// context; defaulting to internal is safer than risking an unintended
	/// external hop.
	pub fn detached() -> Self {
		Self {
			base: None,
			pathname: "/".to_string(),
			search: String::new(),
			hash: String::new(),
		}
	}

	/// The current origin, when known.
	pub fn origin(&self) -> Option<Origin> {
		self.base.as_ref().and_then(Origin::of)
	}

	/// Origin root URL used to resolve relative destinations.
	pub(crate) fn base(&self) -> Option<&Url> {
		self.base.as_ref()
	}

	/// The current path.
	pub fn pathname(&self) -> &str {
		&self.pathname
	}

	/// The current query string, with its leading `?`, or empty.
	pub fn search(&self) -> &str {
		&self.search
	}

	/// The current fragment, with its leading `#`, or empty.
	pub fn hash(&self) -> &str {
		&self.hash
	}

	/// The value a `redirectTo` parameter must carry to return here.
	pub fn return_path(&self) -> String {
		format!("{}{}{}", self.pathname, self.search, self.hash)
	}
}

fn with_prefix(part: &str, prefix: char) -> String {
	if part.is_empty() || part.starts_with(prefix) {
		part.to_string()
	} else {
		format!("{prefix}{part}")
	}
}
