//! Route targets: ready handlers and late-bound controller references.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use pressoir_http::Handler;
use regex::Regex;

use crate::error::RouteError;
use crate::options::RouteOptions;

/// Shape of a controller reference string. The name part may be empty; the
/// namespace-qualified lookup then decides at dispatch time.
static CONTROLLER_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)@(\w+)$").unwrap());

/// A route target as supplied by the caller.
pub enum RouteTarget {
	/// Ready-made handler used as-is.
	Handler(Arc<dyn Handler>),
	/// `"Controller@method"` string resolved at dispatch time.
	Reference(String),
	/// Option bag carrying its own target under `uses`; its options win over
	/// the caller's when the declaration recurses.
	Config {
		uses: Box<RouteTarget>,
		options: RouteOptions,
	},
}

impl RouteTarget {
	/// Builds a config target from a nested target plus its option overlay.
	pub fn config(uses: impl Into<RouteTarget>, options: RouteOptions) -> Self {
		Self::Config {
			uses: Box::new(uses.into()),
			options,
		}
	}
}

impl From<&str> for RouteTarget {
	fn from(reference: &str) -> Self {
		Self::Reference(reference.to_string())
	}
}

impl From<String> for RouteTarget {
	fn from(reference: String) -> Self {
		Self::Reference(reference)
	}
}

impl From<Arc<dyn Handler>> for RouteTarget {
	fn from(handler: Arc<dyn Handler>) -> Self {
		Self::Handler(handler)
	}
}

impl fmt::Debug for RouteTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Handler(_) => f.write_str("RouteTarget::Handler(..)"),
			Self::Reference(reference) => write!(f, "RouteTarget::Reference({reference:?})"),
			Self::Config { uses, .. } => write!(f, "RouteTarget::Config({uses:?})"),
		}
	}
}

/// A validated target stored on a route definition.
#[derive(Clone)]
pub enum BoundTarget {
	Handler(Arc<dyn Handler>),
	Controller { name: String, action: String },
}

impl BoundTarget {
	/// Name and action of a controller reference, when that is what this is.
	pub fn controller_ref(&self) -> Option<(&str, &str)> {
		match self {
			Self::Controller { name, action } => Some((name.as_str(), action.as_str())),
			Self::Handler(_) => None,
		}
	}
}

impl fmt::Debug for BoundTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Handler(_) => f.write_str("BoundTarget::Handler(..)"),
			Self::Controller { name, action } => {
				write!(f, "BoundTarget::Controller({name}@{action})")
			}
		}
	}
}

/// Splits `"Controller@method"` into its parts.
pub(crate) fn parse_reference(reference: &str) -> Result<(String, String), RouteError> {
	let captures = CONTROLLER_REF_RE
		.captures(reference)
		.ok_or_else(|| RouteError::MalformedHandler(reference.to_string()))?;
	let name = captures
		.get(1)
		.map(|found| found.as_str())
		.unwrap_or_default()
		.to_string();
	let action = captures
		.get(2)
		.map(|found| found.as_str())
		.unwrap_or_default()
		.to_string();
	Ok((name, action))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("WidgetController@index", "WidgetController", "index")]
	#[case("admin::Widgets@show", "admin::Widgets", "show")]
	#[case("@orphan", "", "orphan")]
	fn test_parse_reference(#[case] input: &str, #[case] name: &str, #[case] action: &str) {
		assert_eq!(
			parse_reference(input).unwrap(),
			(name.to_string(), action.to_string())
		);
	}

	#[rstest]
	#[case("WidgetController")]
	#[case("Widget@")]
	#[case("Widget@bad-action")]
	#[case("")]
	fn test_malformed_references_are_rejected(#[case] input: &str) {
		let error = parse_reference(input).unwrap_err();
		assert!(matches!(error, RouteError::MalformedHandler(_)));
	}

	#[rstest]
	fn test_reference_with_embedded_at_keeps_last_action_segment() {
		// The lazy name group swallows every '@' except the final separator
		let (name, action) = parse_reference("A@B@index").unwrap();
		assert_eq!(name, "A@B");
		assert_eq!(action, "index");
	}
}
