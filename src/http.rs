//! HTTP primitives module.
//!
//! Request and response types, the [`Handler`](crate::Handler) trait that
//! route and rewrite targets implement, and the structured HTTP error type.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pressoir::http::{Request, Response, handler_fn};
//! ```

pub use pressoir_http::*;
