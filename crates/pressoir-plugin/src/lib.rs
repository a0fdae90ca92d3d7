//! Plugin surface tying route and hook declarations to a host.
//!
//! A [`Plugin`] bundles three things: identity ([`PluginMeta`], which fixes
//! the REST namespace its routes mount under), a route declaration pass, and
//! a hook declaration pass. [`boot`] runs both passes against fresh tables,
//! finalizes them, and drains the result into the host's sink; the returned
//! [`BootReport`] keeps the shared permission and controller handles live
//! for post-boot configuration.
//!
//! ```text
//! PluginMeta ──► boot ──► RouteTable ──► RegistrationSink
//!                  │
//!                  └────► HookTable  ──► HookSink
//! ```
//!
//! # Quick Start
//!
//! ```
//! use pressoir_hooks::{HookEntry, HookSink};
//! use pressoir_plugin::{Plugin, PluginMeta, boot};
//! use pressoir_routes::{
//!     RegistrationSink, RewriteRule, RouteError, RouteOptions, RouteRegistration, RouteTable,
//! };
//!
//! struct ShopPlugin {
//!     meta: PluginMeta,
//! }
//!
//! impl Plugin for ShopPlugin {
//!     fn meta(&self) -> &PluginMeta {
//!         &self.meta
//!     }
//!
//!     fn routes(&self, table: &mut RouteTable) -> Result<(), RouteError> {
//!         table.get("status", "StatusController@show", RouteOptions::new())?;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Recorder {
//!     routes: Vec<RouteRegistration>,
//! }
//!
//! impl RegistrationSink for Recorder {
//!     fn register_route(&mut self, registration: RouteRegistration) {
//!         self.routes.push(registration);
//!     }
//!     fn register_rewrite(&mut self, _rule: RewriteRule) {}
//! }
//!
//! impl HookSink for Recorder {
//!     fn register_hook(&mut self, _entry: &HookEntry) {}
//! }
//!
//! let plugin = ShopPlugin {
//!     meta: PluginMeta::builder("Shop Manager", "2.3.1").build().unwrap(),
//! };
//! let mut sink = Recorder::default();
//! let report = boot(&plugin, &mut sink).unwrap();
//!
//! assert_eq!(report.rest_base(), "shop-manager/v2");
//! assert_eq!(sink.routes.len(), 1);
//! ```
//!
//! Activation is separate from boot: [`activate`] and [`deactivate`] run the
//! plugin's lifecycle callbacks and are meant for one-time install and
//! removal work, not per-request setup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod boot;
pub mod error;
pub mod meta;
pub mod plugin;

pub use boot::{BootReport, activate, boot, deactivate};
pub use error::{PluginError, PluginResult};
pub use meta::{PluginMeta, PluginMetaBuilder, slug};
pub use plugin::Plugin;

// Re-export the async_trait attribute for Plugin implementations that
// override the lifecycle callbacks.
pub use async_trait::async_trait;
