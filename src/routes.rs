//! Routing module.
//!
//! The route table, path pattern compiler, method alias table, resource
//! expansion, rewrite rules, and the registration sink boundary.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pressoir::routes::{ResourceOptions, RouteOptions, RouteTable};
//!
//! let mut table = RouteTable::new("shop", "v1");
//! table
//!     .get("status", "StatusController@show", RouteOptions::new())
//!     .unwrap();
//! ```

pub use pressoir_routes::*;
