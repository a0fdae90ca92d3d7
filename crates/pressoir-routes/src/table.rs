//! The route table: declaration, expansion, finalization, hand-off.

use std::sync::Arc;

use pressoir_http::Request;
use serde_json::Value;

use crate::controller::ControllerRegistry;
use crate::error::RouteError;
use crate::invoker::RouteInvoker;
use crate::methods::MethodSet;
use crate::options::{ArgSchema, RouteOptions};
use crate::pattern::CompiledPattern;
use crate::permission::{PermissionCallback, PermissionSlot};
use crate::resource::{ResourceAction, ResourceOptions};
use crate::rewrite::{RewritePosition, RewriteRule, RewriteTarget};
use crate::sink::{RegistrationSink, RouteRegistration};
use crate::target::{BoundTarget, RouteTarget, parse_reference};

/// One declared route.
#[derive(Debug)]
pub struct RouteDefinition {
	methods: MethodSet,
	pattern: String,
	compiled: CompiledPattern,
	target: BoundTarget,
	options: RouteOptions,
}

impl RouteDefinition {
	pub fn methods(&self) -> &MethodSet {
		&self.methods
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn compiled(&self) -> &CompiledPattern {
		&self.compiled
	}

	pub fn target(&self) -> &BoundTarget {
		&self.target
	}

	pub fn options(&self) -> &RouteOptions {
		&self.options
	}

	/// Merges argument schemas into the route; incoming entries win.
	pub fn args(&mut self, args: impl IntoIterator<Item = (String, ArgSchema)>) -> &mut Self {
		self.options.args.extend(args);
		self
	}

	/// Sets an explicit permission policy for this route.
	pub fn permission(
		&mut self,
		policy: impl Fn(&Request) -> bool + Send + Sync + 'static,
	) -> &mut Self {
		self.options.permission = PermissionCallback::explicit(policy);
		self
	}

	/// Attaches a pass-through option for the host.
	pub fn option(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		self.options.extra.insert(key.into(), value.into());
		self
	}
}

/// Accumulates route declarations until finalization locks it.
///
/// Routes land under the `{namespace}/{version}` REST base. The table owns
/// the two dispatch-time slots (default permission policy and controller
/// registry); both are shared into every invoker it hands out, so
/// configuration changes stay visible after registration.
///
/// # Examples
///
/// ```
/// use pressoir_routes::{RouteOptions, RouteTable};
///
/// let mut table = RouteTable::new("shop", "v1");
/// table
///     .get("widgets/{id}", "WidgetController@show", RouteOptions::new())
///     .unwrap();
///
/// assert_eq!(table.routes().len(), 1);
/// assert_eq!(table.rest_base(), "shop/v1");
/// ```
#[derive(Debug)]
pub struct RouteTable {
	namespace: String,
	version: String,
	routes: Vec<RouteDefinition>,
	rewrites: Vec<RewriteRule>,
	permissions: Arc<PermissionSlot>,
	controllers: Arc<ControllerRegistry>,
	finalized: bool,
}

impl RouteTable {
	pub fn new(namespace: impl Into<String>, version: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			version: version.into(),
			routes: Vec::new(),
			rewrites: Vec::new(),
			permissions: Arc::new(PermissionSlot::new()),
			controllers: Arc::new(ControllerRegistry::new()),
			finalized: false,
		}
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	pub fn version(&self) -> &str {
		&self.version
	}

	/// REST base every route registers under.
	pub fn rest_base(&self) -> String {
		format!("{}/{}", self.namespace, self.version)
	}

	pub fn routes(&self) -> &[RouteDefinition] {
		&self.routes
	}

	pub fn rewrites(&self) -> &[RewriteRule] {
		&self.rewrites
	}

	pub fn is_finalized(&self) -> bool {
		self.finalized
	}

	/// The shared default-permission cell.
	pub fn permissions(&self) -> &Arc<PermissionSlot> {
		&self.permissions
	}

	/// The shared controller registry.
	pub fn controllers(&self) -> &Arc<ControllerRegistry> {
		&self.controllers
	}

	/// Replaces the default permission policy.
	///
	/// Retroactive: routes already declared without an explicit policy pick
	/// up the replacement at dispatch time.
	pub fn set_default_permission(
		&self,
		policy: impl Fn(&Request) -> bool + Send + Sync + 'static,
	) {
		self.permissions.set(policy);
	}

	/// Namespace used to qualify bare controller names at dispatch time.
	pub fn set_controller_namespace(&self, namespace: impl Into<String>) {
		self.controllers.set_namespace(namespace);
	}

	fn ensure_open(&self) -> Result<(), RouteError> {
		if self.finalized {
			return Err(RouteError::Finalized);
		}
		Ok(())
	}

	/// Declares a route from a method spec string.
	///
	/// The spec is a case-insensitive verb list (`"get"`, `"PUT, PATCH"`) or
	/// a symbolic alias (`"creatable"`); see [`MethodSet::parse`].
	pub fn declare(
		&mut self,
		methods: &str,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.ensure_open()?;
		let methods = MethodSet::parse(methods)?;
		self.push_route(methods, pattern, target.into(), options)
	}

	/// Declares a route from an already-built method set.
	pub fn declare_methods(
		&mut self,
		methods: MethodSet,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.ensure_open()?;
		self.push_route(methods, pattern, target.into(), options)
	}

	fn push_route(
		&mut self,
		methods: MethodSet,
		pattern: &str,
		target: RouteTarget,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		let (target, options) = match target {
			// A config bag recurses with its own target; its options win
			RouteTarget::Config {
				uses,
				options: overlay,
			} => {
				return self.push_route(methods, pattern, *uses, options.merge(overlay));
			}
			RouteTarget::Handler(handler) => (BoundTarget::Handler(handler), options),
			RouteTarget::Reference(reference) => {
				let (name, action) = parse_reference(&reference)?;
				(BoundTarget::Controller { name, action }, options)
			}
		};
		let compiled = CompiledPattern::compile(pattern)?;
		tracing::debug!(methods = %methods, pattern, "route declared");

		let index = self.routes.len();
		self.routes.push(RouteDefinition {
			methods,
			pattern: pattern.to_string(),
			compiled,
			target,
			options,
		});
		Ok(&mut self.routes[index])
	}

	/// Declares a GET route.
	pub fn get(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::get(), pattern, target, options)
	}

	/// Declares a POST route.
	pub fn post(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::post(), pattern, target, options)
	}

	/// Declares a PUT route.
	pub fn put(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::put(), pattern, target, options)
	}

	/// Declares a PATCH route.
	pub fn patch(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::patch(), pattern, target, options)
	}

	/// Declares a DELETE route.
	pub fn delete(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::delete(), pattern, target, options)
	}

	/// Declares a read-only (GET) route.
	pub fn readable(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::readable(), pattern, target, options)
	}

	/// Declares a create (POST) route.
	pub fn creatable(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::creatable(), pattern, target, options)
	}

	/// Declares an edit (POST, PUT, PATCH) route.
	pub fn editable(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::editable(), pattern, target, options)
	}

	/// Declares a delete (DELETE) route.
	pub fn deletable(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::deletable(), pattern, target, options)
	}

	/// Declares a route for the five mutating-and-reading verbs.
	pub fn all_methods(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::all(), pattern, target, options)
	}

	/// Declares a route for all seven verbs.
	pub fn any(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.declare_methods(MethodSet::any(), pattern, target, options)
	}

	/// Alias for [`RouteTable::any`].
	pub fn any_methods(
		&mut self,
		pattern: &str,
		target: impl Into<RouteTarget>,
		options: RouteOptions,
	) -> Result<&mut RouteDefinition, RouteError> {
		self.any(pattern, target, options)
	}

	/// Expands a resource into its conventional CRUD routes.
	///
	/// Every action name is validated before the first route is declared, so
	/// a failed expansion leaves the table unchanged.
	pub fn resource(
		&mut self,
		name: &str,
		controller: &str,
		options: ResourceOptions,
	) -> Result<(), RouteError> {
		self.ensure_open()?;
		let actions = options.effective_actions()?;
		let id_token = options.id_token().to_string();
		tracing::debug!(resource = name, actions = actions.len(), "expanding resource");

		for action in actions {
			let path = format!("{}{}", name, action.suffix().replace("%s", &id_token));
			let reference = format!("{}@{}", controller, action.name());
			let route =
				self.declare_methods(action.methods(), &path, reference, options.route.clone())?;
			route.args(action.default_args());
		}
		Ok(())
	}

	/// Resource expansion restricted to the API subset
	/// (index, show, store, update, destroy) unless `only` is set.
	pub fn api(
		&mut self,
		name: &str,
		controller: &str,
		mut options: ResourceOptions,
	) -> Result<(), RouteError> {
		if options.only.is_none() {
			options.only = Some(
				ResourceAction::API_SUBSET
					.iter()
					.map(|action| action.name().to_string())
					.collect(),
			);
		}
		self.resource(name, controller, options)
	}

	/// Registers a rewrite rule; the pattern shares the token compiler and
	/// the finalization gate.
	pub fn rewrite(
		&mut self,
		pattern: &str,
		target: impl Into<RewriteTarget>,
	) -> Result<&mut RewriteRule, RouteError> {
		self.ensure_open()?;
		let (regex, param_names) = CompiledPattern::compile(pattern)?.into_parts();

		let index = self.rewrites.len();
		self.rewrites.push(RewriteRule {
			pattern: pattern.to_string(),
			regex,
			param_names,
			target: target.into(),
			position: RewritePosition::Top,
		});
		Ok(&mut self.rewrites[index])
	}

	/// Locks the table; later declarations fail with
	/// [`RouteError::Finalized`]. Idempotent.
	pub fn finalize(&mut self) {
		if !self.finalized {
			self.finalized = true;
			tracing::info!(
				routes = self.routes.len(),
				rewrites = self.rewrites.len(),
				"route table finalized"
			);
		}
	}

	/// Finalizes the table and hands every route and rewrite rule to the
	/// sink.
	pub fn register_with<S: RegistrationSink + ?Sized>(&mut self, sink: &mut S) {
		self.finalize();
		let rest_base = self.rest_base();
		for route in &self.routes {
			let invoker = RouteInvoker::new(
				route.target.clone(),
				route.options.permission.clone(),
				Arc::clone(&self.permissions),
				Arc::clone(&self.controllers),
			);
			sink.register_route(RouteRegistration {
				rest_base: rest_base.clone(),
				methods: route.methods.clone(),
				regex: route.compiled.regex().to_string(),
				param_names: route.compiled.param_names().to_vec(),
				invoker: Arc::new(invoker),
				options: route.options.clone(),
			});
		}
		for rule in &self.rewrites {
			sink.register_rewrite(rule.clone());
		}
		tracing::info!(rest_base = %rest_base, "route table registered");
	}
}
