//! Host boundary receiving finalized registrations.

use std::fmt;
use std::sync::Arc;

use pressoir_http::Handler;

use crate::methods::MethodSet;
use crate::options::RouteOptions;
use crate::rewrite::RewriteRule;

/// Everything the host needs to register one finalized route.
pub struct RouteRegistration {
	/// `{namespace}/{version}` base the route lives under.
	pub rest_base: String,
	pub methods: MethodSet,
	/// Compiled path pattern with named capture groups, unanchored.
	pub regex: String,
	/// Capture names in pattern order.
	pub param_names: Vec<String>,
	/// Per-request dispatch wrapper: permission check plus target invocation.
	pub invoker: Arc<dyn Handler>,
	pub options: RouteOptions,
}

impl fmt::Debug for RouteRegistration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteRegistration")
			.field("rest_base", &self.rest_base)
			.field("methods", &self.methods)
			.field("regex", &self.regex)
			.field("param_names", &self.param_names)
			.field("options", &self.options)
			.finish()
	}
}

/// Boundary implemented by the embedding host.
///
/// [`crate::RouteTable::register_with`] drains the finalized table through
/// this trait; the host wires each registration into whatever underlying
/// request-routing mechanism it has.
pub trait RegistrationSink {
	fn register_route(&mut self, registration: RouteRegistration);
	fn register_rewrite(&mut self, rule: RewriteRule);
}
