//! Destination classification.

use url::Url;

use crate::context::NavigationContext;
use crate::decision::{NavigationDecision, NavigationMode, ResolveOptions};
use crate::origin::Origin;
use crate::redirect::REDIRECT_PARAM;

/// Classify a destination and produce a navigation decision.
///
/// Destinations may be relative paths (`/profile`), absolute URLs, or
/// protocol-relative URLs (`//chat.tekbreed.com/support`). The decision is a
/// pure function of its inputs and never fails: destinations that cannot be
/// parsed, and contexts without origin information, fall back to an internal
/// navigation carrying the destination verbatim.
pub fn resolve(
	destination: &str,
	context: &NavigationContext,
	options: ResolveOptions,
) -> NavigationDecision {
	let redirect_to = options
		.preserve_return_path
		.then(|| context.return_path());

	// Absolute first; anything else resolves against the current origin.
	let parsed = match Url::parse(destination) {
		Ok(url) => Some(url),
		Err(_) => context.base().and_then(|base| base.join(destination).ok()),
	};

	let Some(mut url) = parsed else {
		// Fail-safe: an unparseable destination stays on the current origin.
		let mode = if options.force_external {
			NavigationMode::External
		} else {
			NavigationMode::Internal
		};
		return NavigationDecision {
			mode,
			url: destination.to_string(),
			redirect_to,
			replace: options.replace,
		};
	};

	if let Some(value) = &redirect_to {
		if url.host_str().is_some() {
			url.query_pairs_mut().append_pair(REDIRECT_PARAM, value);
		}
	}

	let mode = classify(&url, context, options);
	let final_url = match mode {
		NavigationMode::Internal => path_form(&url),
		NavigationMode::External => url.to_string(),
	};

	NavigationDecision {
		mode,
		url: final_url,
		redirect_to,
		replace: options.replace,
	}
}

fn classify(
	destination: &Url,
	context: &NavigationContext,
	options: ResolveOptions,
) -> NavigationMode {
	if options.force_external {
		return NavigationMode::External;
	}

	// No origin information yet: an unintended external hop is worse than a
	// stale internal one.
	let Some(current) = context.origin() else {
		return NavigationMode::Internal;
	};

	let Some(target) = Origin::of(destination) else {
		// Hostless destination (mailto: etc). Not routable client-side.
		return NavigationMode::External;
	};

	if target == current {
		return NavigationMode::Internal;
	}

	// Sibling apps served on different local ports during development need
	// a full document load. Structural comparison already classifies them
	// as cross-origin; this branch keeps the rule explicit.
	if target.is_loopback() && current.is_loopback() && target.port() != current.port() {
		return NavigationMode::External;
	}

	NavigationMode::External
}

/// Path+query+hash form handed to the client router for internal hops.
fn path_form(url: &Url) -> String {
	let mut out = url.path().to_string();
	if let Some(query) = url.query() {
		out.push('?');
		out.push_str(query);
	}
	if let Some(fragment) = url.fragment() {
		out.push('#');
		out.push_str(fragment);
	}
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn ctx() -> NavigationContext {
		NavigationContext::from_request_url("https://tekbreed.com/articles?page=2#list").unwrap()
	}

	#[test]
	fn relative_destination_is_internal() {
		let decision = resolve("/profile", &ctx(), ResolveOptions::default());
		assert_eq!(decision.mode, NavigationMode::Internal);
		assert_eq!(decision.url, "/profile");
		assert_eq!(decision.redirect_to, None);
	}

	#[test]
	fn same_origin_absolute_destination_is_rewritten_to_path_form() {
		let decision = resolve(
			"https://tekbreed.com/profile?tab=account#top",
			&ctx(),
			ResolveOptions::default(),
		);
		assert_eq!(decision.mode, NavigationMode::Internal);
		assert_eq!(decision.url, "/profile?tab=account#top");
	}

	#[test]
	fn cross_origin_destination_is_external() {
		let decision = resolve(
			"https://chat.tekbreed.com/support",
			&ctx(),
			ResolveOptions::default(),
		);
		assert_eq!(decision.mode, NavigationMode::External);
		assert_eq!(decision.url, "https://chat.tekbreed.com/support");
	}

	#[test]
	fn protocol_relative_destination_adopts_current_scheme() {
		let decision = resolve(
			"//chat.tekbreed.com/support",
			&ctx(),
			ResolveOptions::default(),
		);
		assert_eq!(decision.mode, NavigationMode::External);
		assert_eq!(decision.url, "https://chat.tekbreed.com/support");
	}

	#[test]
	fn scheme_mismatch_is_external() {
		let decision = resolve(
			"http://tekbreed.com/profile",
			&ctx(),
			ResolveOptions::default(),
		);
		assert_eq!(decision.mode, NavigationMode::External);
	}

	#[test]
	fn force_external_short_circuits() {
		let decision = resolve(
			"/profile",
			&ctx(),
			ResolveOptions {
				force_external: true,
				..Default::default()
			},
		);
		assert_eq!(decision.mode, NavigationMode::External);
		assert_eq!(decision.url, "https://tekbreed.com/profile");
	}

	#[test]
	fn cross_port_localhost_is_external() {
		let ctx = NavigationContext::from_request_url("http://localhost:5173/").unwrap();
		let decision = resolve(
			"http://localhost:5174/chat",
			&ctx,
			ResolveOptions::default(),
		);
		assert_eq!(decision.mode, NavigationMode::External);

		let decision = resolve(
			"http://localhost:5173/chat",
			&ctx,
			ResolveOptions::default(),
		);
		assert_eq!(decision.mode, NavigationMode::Internal);
	}

	#[test]
	fn hostless_destination_is_external() {
		let decision = resolve("mailto:support@tekbreed.com", &ctx(), ResolveOptions::default());
		assert_eq!(decision.mode, NavigationMode::External);
		assert_eq!(decision.url, "mailto:support@tekbreed.com");
	}

	#[test]
	fn detached_context_defaults_to_internal() {
		let decision = resolve(
			"https://chat.tekbreed.com/support",
			&NavigationContext::detached(),
			ResolveOptions::default(),
		);
		assert_eq!(decision.mode, NavigationMode::Internal);
	}

	#[test]
	fn preserve_return_path_attaches_redirect_parameter() {
		let decision = resolve(
			"/auth/signin",
			&ctx(),
			ResolveOptions {
				preserve_return_path: true,
				..Default::default()
			},
		);
		assert_eq!(decision.mode, NavigationMode::Internal);
		assert_eq!(decision.redirect_to.as_deref(), Some("/articles?page=2#list"));
		assert!(decision.url.starts_with("/auth/signin?redirectTo="));
	}

	#[test]
	fn preserve_return_path_applies_to_external_hops() {
		let decision = resolve(
			"https://chat.tekbreed.com/support",
			&ctx(),
			ResolveOptions {
				preserve_return_path: true,
				..Default::default()
			},
		);
		assert_eq!(decision.mode, NavigationMode::External);
		let url = Url::parse(&decision.url).unwrap();
		let (_, value) = url
			.query_pairs()
			.find(|(key, _)| key == REDIRECT_PARAM)
			.unwrap();
		assert_eq!(value, "/articles?page=2#list");
	}

	#[test]
	fn replace_is_passed_through() {
		let decision = resolve(
			"/profile",
			&ctx(),
			ResolveOptions {
				replace: true,
				..Default::default()
			},
		);
		assert!(decision.replace);
	}

	#[test]
	fn unparseable_destination_under_detached_context_falls_back() {
		let decision = resolve("/profile", &NavigationContext::detached(), ResolveOptions::default());
		assert_eq!(decision.mode, NavigationMode::Internal);
		assert_eq!(decision.url, "/profile");
	}
}
