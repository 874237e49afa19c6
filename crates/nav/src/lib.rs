//! Cross-service navigation resolution.
//!
//! The deployment this crate serves is a family of sibling web applications
//! (marketing site, chat, admin) living on subdomains of one base domain in
//! production and on distinct `localhost` ports in development. Given a
//! destination and the current location, [`resolve`] decides whether the hop
//! is:
//!
//! - **Internal**: a client-side route transition on the same origin,
//!   preserving in-memory application state; or
//! - **External**: a full document navigation, required when crossing an
//!   origin or a sibling-service boundary.
//!
//! The decision is pure and synchronous: no I/O, no shared mutable state,
//! same output for the same inputs. Malformed destinations never raise; they
//! fall back to an internal navigation on the current origin.
//!
//! # Return paths
//!
//! Interstitial flows (sign-in, sign-up, subscription) carry the user's
//! original location in a [`REDIRECT_PARAM`] query parameter so they can be
//! sent back afterwards. Incoming values of that parameter are untrusted;
//! [`safe_redirect`] is the single chokepoint that validates them against
//! the deployment's [`AllowedDomains`] before a redirect is issued.
//!
//! # Example
//!
//! ```
//! use waypoint_nav::{NavigationContext, NavigationMode, ResolveOptions, resolve};
//!
//! let context = NavigationContext::from_request_url(
//! 	"https://tekbreed.com/articles/intro?tab=code",
//! )?;
//!
//! let decision = resolve("/auth/signin", &context, ResolveOptions {
//! 	preserve_return_path: true,
//! 	..Default::default()
//! });
//!
//! assert_eq!(decision.mode, NavigationMode::Internal);
//! assert!(decision.url.starts_with("/auth/signin?redirectTo="));
//! # Ok::<(), waypoint_nav::NavError>(())
//! ```

pub mod context;
pub mod decision;
pub mod error;
pub mod origin;
pub mod redirect;
pub mod registry;
mod resolve;

pub use context::NavigationContext;
pub use decision::{NavigationDecision, NavigationMode, ResolveOptions};
pub use error::{NavError, Result};
pub use origin::Origin;
pub use redirect::{REDIRECT_PARAM, extract_return_path, safe_redirect, validate_redirect_target};
pub use registry::{AllowedDomains, ServiceRegistry};
pub use resolve::resolve;
