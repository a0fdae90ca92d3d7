//! Plugin module.
//!
//! Plugin metadata with REST namespace derivation, the [`Plugin`] lifecycle
//! trait, and the boot sequence that drains a plugin's declarations into
//! the host's sinks.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pressoir::plugin::{Plugin, PluginMeta};
//!
//! let meta = PluginMeta::builder("Shop Manager", "2.3.1").build().unwrap();
//! assert_eq!(meta.rest_base(), "shop-manager/v2");
//! ```

pub use pressoir_plugin::*;
