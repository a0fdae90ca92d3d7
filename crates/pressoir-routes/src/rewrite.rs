//! Rewrite rules handed to the host's URL rewriter.

use std::fmt;
use std::sync::Arc;

use pressoir_http::Handler;

/// Where a rule lands relative to the host's existing rewrite rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewritePosition {
	#[default]
	Top,
	Bottom,
}

/// What a matched rewrite resolves to.
#[derive(Clone)]
pub enum RewriteTarget {
	/// Host-side query mapping, e.g. `index.php?widget=$matches[1]`.
	Query(String),
	/// In-process handler.
	Handler(Arc<dyn Handler>),
}

impl From<&str> for RewriteTarget {
	fn from(query: &str) -> Self {
		Self::Query(query.to_string())
	}
}

impl From<String> for RewriteTarget {
	fn from(query: String) -> Self {
		Self::Query(query)
	}
}

impl From<Arc<dyn Handler>> for RewriteTarget {
	fn from(handler: Arc<dyn Handler>) -> Self {
		Self::Handler(handler)
	}
}

impl fmt::Debug for RewriteTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Query(query) => write!(f, "RewriteTarget::Query({query:?})"),
			Self::Handler(_) => f.write_str("RewriteTarget::Handler(..)"),
		}
	}
}

/// A compiled rewrite rule awaiting host registration.
///
/// The pattern runs through the same token compiler as route patterns, so
/// `{name}` captures work in rewrites too.
#[derive(Debug, Clone)]
pub struct RewriteRule {
	pub pattern: String,
	pub regex: String,
	pub param_names: Vec<String>,
	pub target: RewriteTarget,
	pub position: RewritePosition,
}

impl RewriteRule {
	/// Places the rule at the top or bottom of the host's rule list.
	pub fn at(&mut self, position: RewritePosition) -> &mut Self {
		self.position = position;
		self
	}
}
