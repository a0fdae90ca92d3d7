//! The plugin trait.

use async_trait::async_trait;
use pressoir_hooks::HookTable;
use pressoir_routes::{RouteError, RouteTable};

use crate::error::PluginResult;
use crate::meta::PluginMeta;

/// A unit of functionality the host mounts as one REST namespace.
///
/// [`Plugin::routes`] and [`Plugin::hooks`] are declaration passes run by
/// [`boot`](crate::boot): they fill tables the boot sequence then hands to
/// the host's sink. The activation callbacks run outside boot, once per
/// install or removal, and are where schema setup and teardown belong.
///
/// # Example
///
/// ```
/// use pressoir_plugin::{Plugin, PluginMeta};
/// use pressoir_routes::{RouteError, RouteOptions, RouteTable};
///
/// struct ShopPlugin {
///     meta: PluginMeta,
/// }
///
/// impl Plugin for ShopPlugin {
///     fn meta(&self) -> &PluginMeta {
///         &self.meta
///     }
///
///     fn routes(&self, table: &mut RouteTable) -> Result<(), RouteError> {
///         table.get("status", "StatusController@show", RouteOptions::new())?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Plugin: Send + Sync {
	/// Identity and REST mount point.
	fn meta(&self) -> &PluginMeta;

	/// Declares the plugin's routes and rewrite rules.
	///
	/// The table is already namespaced under
	/// [`PluginMeta::rest_base`](crate::PluginMeta::rest_base); patterns are
	/// relative to it.
	fn routes(&self, table: &mut RouteTable) -> Result<(), RouteError>;

	/// Declares the plugin's actions and filters. Defaults to none.
	fn hooks(&self, _table: &mut HookTable) {}

	/// Runs once when the host activates the plugin.
	async fn on_activate(&self) -> PluginResult<()> {
		Ok(())
	}

	/// Runs once when the host deactivates the plugin.
	async fn on_deactivate(&self) -> PluginResult<()> {
		Ok(())
	}
}
