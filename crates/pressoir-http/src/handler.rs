use std::sync::Arc;

use async_trait::async_trait;

use crate::{HttpResult, Request, Response};

/// Request handler abstraction
///
/// Route targets, rewrite targets, and host adapters all speak this trait.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> HttpResult<Response>;
}

#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> HttpResult<Response> {
		(**self).handle(request).await
	}
}

/// Adapter that lets a plain async closure act as a [`Handler`]
pub struct FnHandler<F>(F);

#[async_trait]
impl<F, Fut> Handler for FnHandler<F>
where
	F: Fn(Request) -> Fut + Send + Sync,
	Fut: std::future::Future<Output = HttpResult<Response>> + Send,
{
	async fn handle(&self, request: Request) -> HttpResult<Response> {
		(self.0)(request).await
	}
}

/// Wrap an async closure into an `Arc<dyn Handler>`
///
/// # Examples
///
/// ```
/// use pressoir_http::{handler_fn, Response};
///
/// let handler = handler_fn(|_request| async { Ok(Response::ok()) });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn Handler>
where
	F: Fn(Request) -> Fut + Send + Sync + 'static,
	Fut: std::future::Future<Output = HttpResult<Response>> + Send + 'static,
{
	Arc::new(FnHandler(f))
}
