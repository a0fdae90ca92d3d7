//! Declarative route table with a Laravel-flavored surface.
//!
//! Callers declare routes against a [`RouteTable`] (directly, through the
//! named verb constructors, or via [`RouteTable::resource`] expansion); each
//! path template compiles into a regex with named capture groups; a one-way
//! [`RouteTable::finalize`] locks the table and
//! [`RouteTable::register_with`] drains it into the host through the
//! [`RegistrationSink`] boundary.
//!
//! ```text
//! declare / resource / rewrite ──► RouteTable ──► finalize ──► RegistrationSink
//!                                      │
//!                      PermissionSlot ─┴─ ControllerRegistry
//!                      (read per request by every RouteInvoker)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use pressoir_routes::{ResourceOptions, RouteOptions, RouteTable};
//!
//! let mut table = RouteTable::new("shop", "v1");
//!
//! table
//!     .get("status", "StatusController@index", RouteOptions::new())
//!     .unwrap();
//! table
//!     .resource("widgets", "WidgetController", ResourceOptions::new().only(["index", "show"]))
//!     .unwrap();
//!
//! assert_eq!(table.routes().len(), 3);
//! ```

pub mod controller;
pub mod error;
pub mod invoker;
pub mod methods;
pub mod options;
pub mod pattern;
pub mod permission;
pub mod resource;
pub mod rewrite;
pub mod sink;
pub mod table;
pub mod target;

pub use controller::{Controller, ControllerRegistry};
pub use error::RouteError;
pub use invoker::RouteInvoker;
pub use methods::MethodSet;
pub use options::{ArgKind, ArgSchema, RouteOptions, SanitizeFn, comma_list};
pub use pattern::CompiledPattern;
pub use permission::{PermissionCallback, PermissionFn, PermissionSlot};
pub use resource::{ResourceAction, ResourceOptions};
pub use rewrite::{RewritePosition, RewriteRule, RewriteTarget};
pub use sink::{RegistrationSink, RouteRegistration};
pub use table::{RouteDefinition, RouteTable};
pub use target::{BoundTarget, RouteTarget};

// Re-export the async_trait attribute for Controller implementations.
pub use async_trait::async_trait;
