//! Per-request dispatch wrapper built for every registered route.

use std::sync::Arc;

use async_trait::async_trait;
use hyper::StatusCode;
use pressoir_http::{Handler, HttpError, HttpResult, Request, Response};

use crate::controller::ControllerRegistry;
use crate::permission::{PermissionCallback, PermissionSlot};
use crate::target::BoundTarget;

/// Handler wrapper the registration sink receives for each route.
///
/// Per request it evaluates the permission policy, then either delegates to
/// the bound handler or resolves the controller reference against the
/// registry and dispatches the action on a fresh instance. Missing
/// controllers and missing actions degrade into structured 404 responses
/// rather than errors, since they must become per-request HTTP results.
pub struct RouteInvoker {
	target: BoundTarget,
	permission: PermissionCallback,
	permissions: Arc<PermissionSlot>,
	controllers: Arc<ControllerRegistry>,
}

impl RouteInvoker {
	pub(crate) fn new(
		target: BoundTarget,
		permission: PermissionCallback,
		permissions: Arc<PermissionSlot>,
		controllers: Arc<ControllerRegistry>,
	) -> Self {
		Self {
			target,
			permission,
			permissions,
			controllers,
		}
	}

	fn allowed(&self, request: &Request) -> bool {
		match &self.permission {
			PermissionCallback::Default => self.permissions.allows(request),
			PermissionCallback::Explicit(policy) => policy(request),
		}
	}
}

#[async_trait]
impl Handler for RouteInvoker {
	async fn handle(&self, request: Request) -> HttpResult<Response> {
		if !self.allowed(&request) {
			return Ok(structured_error(
				StatusCode::FORBIDDEN,
				"rest_forbidden",
				"Sorry, you are not allowed to do that.".to_string(),
			));
		}

		match &self.target {
			BoundTarget::Handler(handler) => handler.handle(request).await,
			BoundTarget::Controller { name, action } => {
				let controller = match self.controllers.resolve(name) {
					Some(controller) => controller,
					None => {
						tracing::warn!(controller = %name, "controller not registered");
						return Ok(structured_error(
							StatusCode::NOT_FOUND,
							"controller_not_found",
							format!("Controller Not Found: {name}"),
						));
					}
				};
				match controller.dispatch(action, request).await {
					Ok(response) => Ok(response),
					Err(HttpError::MethodNotFound(_)) => Ok(structured_error(
						StatusCode::NOT_FOUND,
						"method_not_found",
						format!("Method Not Found: {name}@{action}"),
					)),
					Err(other) => Err(other),
				}
			}
		}
	}
}

/// Renders the structured JSON error body hosts expect:
/// `{"code", "message", "data": {"status"}}`.
fn structured_error(status: StatusCode, code: &str, message: String) -> Response {
	let body = serde_json::json!({
		"code": code,
		"message": message,
		"data": { "status": status.as_u16() },
	});
	Response::new(status)
		.with_json(&body)
		.unwrap_or_else(|_| Response::new(status))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_structured_error_shape() {
		// Act
		let response = structured_error(
			StatusCode::NOT_FOUND,
			"method_not_found",
			"Method Not Found: Widgets@missing".to_string(),
		);

		// Assert
		assert_eq!(response.status, StatusCode::NOT_FOUND);
		let body = response.json_body().unwrap();
		assert_eq!(body["code"], "method_not_found");
		assert_eq!(body["message"], "Method Not Found: Widgets@missing");
		assert_eq!(body["data"]["status"], 404);
	}
}
