//! Permission policies and the shared default-policy slot.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use pressoir_http::Request;

/// Boxed permission policy evaluated against an incoming request.
pub type PermissionFn = dyn Fn(&Request) -> bool + Send + Sync;

/// Per-route permission setting.
///
/// `Default` is a marker resolved against the shared [`PermissionSlot`] at
/// dispatch time, not a captured closure, so replacing the default policy is
/// retroactive for every route that did not set an explicit one.
#[derive(Clone, Default)]
pub enum PermissionCallback {
	#[default]
	Default,
	Explicit(Arc<PermissionFn>),
}

impl PermissionCallback {
	/// Wraps a policy closure as an explicit per-route setting.
	pub fn explicit(policy: impl Fn(&Request) -> bool + Send + Sync + 'static) -> Self {
		Self::Explicit(Arc::new(policy))
	}

	pub fn is_default(&self) -> bool {
		matches!(self, Self::Default)
	}
}

impl fmt::Debug for PermissionCallback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default => f.write_str("PermissionCallback::Default"),
			Self::Explicit(_) => f.write_str("PermissionCallback::Explicit(..)"),
		}
	}
}

/// The single mutable cell holding the default permission policy.
///
/// Starts as allow-all. Shared between the route table and every dispatch
/// wrapper it hands out.
pub struct PermissionSlot {
	policy: RwLock<Arc<PermissionFn>>,
}

impl Default for PermissionSlot {
	fn default() -> Self {
		Self {
			policy: RwLock::new(Arc::new(|_request: &Request| true)),
		}
	}
}

impl PermissionSlot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the default policy.
	pub fn set(&self, policy: impl Fn(&Request) -> bool + Send + Sync + 'static) {
		*self.policy.write() = Arc::new(policy);
	}

	/// Snapshot of the current policy.
	pub fn current(&self) -> Arc<PermissionFn> {
		Arc::clone(&self.policy.read())
	}

	/// Evaluates the current policy against a request.
	pub fn allows(&self, request: &Request) -> bool {
		(self.current())(request)
	}
}

impl fmt::Debug for PermissionSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("PermissionSlot")
	}
}
