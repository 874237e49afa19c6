//! Resolver options and output.

/// How a navigation should be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
	/// Client-side route transition, no document reload. In-memory
	/// application state survives.
	Internal,
	/// Full document navigation, crossing an origin or an independently
	/// deployed service boundary.
	External,
}

/// Caller options for [`resolve`](crate::resolve).
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
	/// Skip classification and treat the destination as external.
	pub force_external: bool,

	/// Replace the current history entry instead of pushing. Copied into
	/// the decision for the caller's navigation primitive, not interpreted
	/// by the resolver.
	pub replace: bool,

	/// Attach a `redirectTo` parameter encoding the current location so the
	/// destination can send the user back, e.g. across a sign-in hop.
	pub preserve_return_path: bool,
}

/// The outcome of classifying one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDecision {
	/// Whether the client router or a full document load handles this hop.
	pub mode: NavigationMode,

	/// Final destination: path+query+hash form for internal hops, an
	/// absolute URL for external ones.
	pub url: String,

	/// Return-path value attached to the destination, when one was
	/// requested.
	pub redirect_to: Option<String>,

	/// History-replace passthrough from [`ResolveOptions::replace`].
	pub replace: bool,
}

impl NavigationDecision {
	/// Whether this hop needs a full document load.
	pub fn is_external(&self) -> bool {
		self.mode == NavigationMode::External
	}
}
