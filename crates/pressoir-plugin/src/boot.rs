//! The boot sequence: declaration passes, finalization, sink hand-off.

use std::sync::Arc;

use pressoir_hooks::{HookSink, HookTable};
use pressoir_routes::{ControllerRegistry, PermissionSlot, RegistrationSink, RouteTable};

use crate::error::PluginResult;
use crate::plugin::Plugin;

/// What a successful boot produced, plus the handles that stay live.
///
/// The permission slot and controller registry are the same shared cells the
/// registered invokers read on every dispatch, so hosts can install a
/// default permission policy or additional controllers after boot and have
/// existing routes pick them up.
#[derive(Debug)]
pub struct BootReport {
	rest_base: String,
	route_count: usize,
	rewrite_count: usize,
	hook_count: usize,
	permissions: Arc<PermissionSlot>,
	controllers: Arc<ControllerRegistry>,
}

impl BootReport {
	/// Base path the plugin's routes registered under.
	pub fn rest_base(&self) -> &str {
		&self.rest_base
	}

	/// Number of routes handed to the sink.
	pub fn route_count(&self) -> usize {
		self.route_count
	}

	/// Number of rewrite rules handed to the sink.
	pub fn rewrite_count(&self) -> usize {
		self.rewrite_count
	}

	/// Number of hook entries handed to the sink.
	pub fn hook_count(&self) -> usize {
		self.hook_count
	}

	/// The default-permission cell read by every registered invoker.
	pub fn permissions(&self) -> &Arc<PermissionSlot> {
		&self.permissions
	}

	/// The controller registry consulted by every registered invoker.
	pub fn controllers(&self) -> &Arc<ControllerRegistry> {
		&self.controllers
	}
}

/// Boots a plugin into the host's sink.
///
/// Runs the declaration passes ([`Plugin::routes`], then [`Plugin::hooks`])
/// against fresh tables namespaced by the plugin's metadata, finalizes the
/// route table, and drains both tables into the sink. A declaration error
/// aborts the boot before anything reaches the sink.
///
/// # Errors
///
/// Propagates any [`RouteError`](pressoir_routes::RouteError) raised while
/// the plugin declares its routes.
pub fn boot<P, S>(plugin: &P, sink: &mut S) -> PluginResult<BootReport>
where
	P: Plugin + ?Sized,
	S: RegistrationSink + HookSink,
{
	let meta = plugin.meta();
	tracing::info!(plugin = meta.name(), version = %meta.version(), "booting plugin");

	let mut routes = RouteTable::new(meta.rest_namespace(), meta.rest_version());
	plugin.routes(&mut routes)?;
	if routes.routes().is_empty() && routes.rewrites().is_empty() {
		tracing::warn!(plugin = meta.name(), "plugin declared no routes or rewrites");
	}

	let mut hooks = HookTable::new();
	plugin.hooks(&mut hooks);

	let report = BootReport {
		rest_base: routes.rest_base(),
		route_count: routes.routes().len(),
		rewrite_count: routes.rewrites().len(),
		hook_count: hooks.len(),
		permissions: Arc::clone(routes.permissions()),
		controllers: Arc::clone(routes.controllers()),
	};

	routes.register_with(&mut *sink);
	hooks.register_with(&mut *sink);

	tracing::info!(
		plugin = meta.name(),
		rest_base = %report.rest_base,
		routes = report.route_count,
		rewrites = report.rewrite_count,
		hooks = report.hook_count,
		"plugin booted"
	);
	Ok(report)
}

/// Runs the plugin's activation callback.
pub async fn activate<P: Plugin + ?Sized>(plugin: &P) -> PluginResult<()> {
	plugin.on_activate().await?;
	tracing::info!(plugin = plugin.meta().name(), "plugin activated");
	Ok(())
}

/// Runs the plugin's deactivation callback.
pub async fn deactivate<P: Plugin + ?Sized>(plugin: &P) -> PluginResult<()> {
	plugin.on_deactivate().await?;
	tracing::info!(plugin = plugin.meta().name(), "plugin deactivated");
	Ok(())
}
