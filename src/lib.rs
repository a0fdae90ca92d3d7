//! # Pressoir
//!
//! Declarative REST routing, rewrite rules, and lifecycle hooks for plugins
//! embedded in a host application, with Laravel-flavored declaration
//! ergonomics over a WordPress-style registration model.
//!
//! A plugin declares what it wants - routes, resource expansions, rewrite
//! rules, actions and filters - against in-memory tables. The tables
//! validate every declaration up front, compile path templates into regexes
//! with named captures, and hand the finalized result to the host through
//! narrow sink traits. Dispatch-time concerns (the default permission
//! policy, controller resolution) live in shared cells the host can
//! reconfigure after registration.
//!
//! ## Feature Flags
//!
//! - `hooks` - the [`hooks`] module: hook tables with priority ordering and
//!   local dispatch
//! - `plugin` - the [`plugin`] module: plugin metadata, the lifecycle
//!   trait, and the boot sequence (implies `hooks`)
//! - `full` (default) - everything above
//!
//! The routing core ([`routes`] and [`http`]) is always included.
//!
//! ## Quick Example
//!
//! ```
//! use pressoir::{ResourceOptions, RouteOptions, RouteTable};
//!
//! let mut table = RouteTable::new("shop", "v1");
//!
//! // One-off route bound to a controller action
//! table
//!     .get("status", "StatusController@show", RouteOptions::new())
//!     .unwrap();
//!
//! // Conventional CRUD expansion
//! table
//!     .resource("widgets", "WidgetController", ResourceOptions::new().except(["destroy"]))
//!     .unwrap();
//!
//! table.finalize();
//! assert_eq!(table.routes().len(), 7);
//! assert_eq!(table.rest_base(), "shop/v1");
//! ```

// Module re-exports, one per member crate
pub mod http;
#[cfg(feature = "hooks")]
pub mod hooks;
#[cfg(feature = "plugin")]
pub mod plugin;
pub mod routes;

// Re-export HTTP primitives
pub use pressoir_http::{
	FnHandler, Handler, HttpError, HttpResult, Request, RequestBuilder, Response, handler_fn,
};

// Re-export the routing core
pub use pressoir_routes::{
	ArgKind, ArgSchema, CompiledPattern, Controller, ControllerRegistry, MethodSet,
	PermissionCallback, PermissionSlot, RegistrationSink, ResourceAction, ResourceOptions,
	RewritePosition, RewriteRule, RewriteTarget, RouteDefinition, RouteError, RouteOptions,
	RouteRegistration, RouteTable, RouteTarget, comma_list,
};

// Re-export hook tables
#[cfg(feature = "hooks")]
pub use pressoir_hooks::{HookEntry, HookKind, HookSink, HookTable};

// Re-export the plugin scaffold
#[cfg(feature = "plugin")]
pub use pressoir_plugin::{
	BootReport, Plugin, PluginError, PluginMeta, PluginResult, activate, boot, deactivate, slug,
};

// Re-export Method and StatusCode from hyper (already used in pressoir_http)
pub use hyper::{Method, StatusCode};

// Re-export common external dependencies
pub use async_trait::async_trait;

pub mod prelude {
	//! Commonly used types in one import.

	pub use crate::{
		Controller, Handler, Method, MethodSet, RegistrationSink, Request, ResourceOptions,
		Response, RouteError, RouteOptions, RouteTable, StatusCode, handler_fn,
	};

	// External
	pub use async_trait::async_trait;

	// Hooks feature
	#[cfg(feature = "hooks")]
	pub use crate::{HookEntry, HookSink, HookTable};

	// Plugin feature
	#[cfg(feature = "plugin")]
	pub use crate::{BootReport, Plugin, PluginMeta, boot};
}
