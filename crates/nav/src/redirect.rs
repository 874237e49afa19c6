//! Validation of caller-supplied redirect targets.
//!
//! Return-path values arrive in query parameters and are attacker
//! influenceable. Everything that issues a redirect based on one must pass
//! it through [`safe_redirect`] first; honoring an unvalidated value is an
//! open-redirect vulnerability.

use url::Url;

use crate::registry::AllowedDomains;

/// Query parameter carrying the post-flow return path. The only wire-level
/// name this crate defines.
pub const REDIRECT_PARAM: &str = "redirectTo";

/// Whether a redirect candidate may be honored.
///
/// Same-site relative paths (single leading `/`) are always allowed.
/// Absolute `http`/`https` URLs are allowed only when their host equals an
/// allowed domain or is a strict subdomain of one. Everything else is denied:
/// non-web schemes, protocol-relative URLs naming an unlisted host,
/// backslash-prefixed paths, and unparseable strings.
pub fn validate_redirect_target(candidate: &str, allowed: &AllowedDomains) -> bool {
	if candidate.is_empty() {
		return false;
	}

	if is_site_relative(candidate) {
		return true;
	}

	match Url::parse(candidate) {
		Ok(url) => {
			if !matches!(url.scheme(), "http" | "https") {
				return false;
			}
			url.host_str().is_some_and(|host| allowed.allows_host(host))
		}
		Err(url::ParseError::RelativeUrlWithoutBase) => {
			// Protocol-relative: browsers adopt the current scheme, so the
			// named host decides.
			if let Some(rest) = candidate.strip_prefix("//") {
				Url::parse(&format!("https://{rest}"))
					.ok()
					.and_then(|url| url.host_str().map(|host| allowed.allows_host(host)))
					.unwrap_or(false)
			} else {
				false
			}
		}
		Err(_) => false,
	}
}

/// Single chokepoint for "return to previous page" values.
///
/// Returns the candidate when it passes [`validate_redirect_target`], the
/// fallback otherwise. Absent, empty, and malformed candidates all take the
/// fallback; hostile input never surfaces as an error.
pub fn safe_redirect(candidate: Option<&str>, fallback: &str, allowed: &AllowedDomains) -> String {
	match candidate {
		Some(candidate) if validate_redirect_target(candidate, allowed) => candidate.to_string(),
		Some(candidate) if !candidate.is_empty() => {
			tracing::warn!(candidate, "rejected redirect target, using fallback");
			fallback.to_string()
		}
		_ => fallback.to_string(),
	}
}

/// Read the `redirectTo` parameter from an incoming URL.
///
/// Returns the percent-decoded value. The result is untrusted input and must
/// still go through [`safe_redirect`] before use.
pub fn extract_return_path(url: &str) -> Option<String> {
	let parsed = Url::parse(url).ok()?;
	parsed
		.query_pairs()
		.find(|(key, _)| key == REDIRECT_PARAM)
		.map(|(_, value)| value.into_owned())
}

/// A single leading slash, and neither `//` nor `/\` which browsers treat as
/// host-carrying.
fn is_site_relative(candidate: &str) -> bool {
	let bytes = candidate.as_bytes();
	bytes.first() == Some(&b'/')
		&& bytes.get(1) != Some(&b'/')
		&& bytes.get(1) != Some(&b'\\')
}
