//! HTTP primitives shared across the Pressoir framework.
//!
//! Provides [`Request`], [`Response`], the [`Handler`] trait that route and
//! rewrite targets implement, and the [`HttpError`] type that renders as a
//! structured JSON error body.

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::{HttpError, HttpResult};
pub use handler::{FnHandler, Handler, handler_fn};
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export the async_trait attribute so downstream handlers do not need a
// direct dependency to implement Handler.
pub use async_trait::async_trait;
