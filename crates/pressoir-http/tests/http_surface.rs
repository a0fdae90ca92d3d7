//! The crate surface as a consumer sees it: JSON round trips through a
//! handler, error-to-response rendering, and stateful closure handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hyper::{Method, StatusCode};
use pressoir_http::{Handler, HttpError, HttpResult, Request, Response, async_trait, handler_fn};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct CreateWidget {
	name: String,
}

struct WidgetEndpoint;

#[async_trait]
impl Handler for WidgetEndpoint {
	async fn handle(&self, request: Request) -> HttpResult<Response> {
		let payload: CreateWidget = request.json()?;
		Response::created().with_json(&json!({ "created": payload.name }))
	}
}

#[tokio::test]
async fn test_json_round_trip_through_a_handler() {
	// Arrange
	let request = Request::builder()
		.method(Method::POST)
		.uri("/widgets")
		.body(r#"{"name":"gear"}"#)
		.build()
		.unwrap();

	// Act
	let response = WidgetEndpoint.handle(request).await.unwrap();

	// Assert
	assert_eq!(response.status, StatusCode::CREATED);
	assert_eq!(response.json_body().unwrap()["created"], "gear");
}

#[tokio::test]
async fn test_handler_errors_render_as_structured_responses() {
	// Arrange: body is not the expected shape
	let request = Request::builder()
		.method(Method::POST)
		.uri("/widgets")
		.body(r#"{"label":"gear"}"#)
		.build()
		.unwrap();

	// Act: convert the failure the way host glue does
	let response: Response = match WidgetEndpoint.handle(request).await {
		Ok(response) => response,
		Err(error) => error.into(),
	};

	// Assert
	assert_eq!(response.status, StatusCode::BAD_REQUEST);
	let body = response.json_body().unwrap();
	assert_eq!(body["code"], "bad_request");
	assert_eq!(body["data"]["status"], 400);
}

#[tokio::test]
async fn test_handler_fn_closures_keep_captured_state() {
	// Arrange
	let hits = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&hits);
	let handler = handler_fn(move |_request: Request| {
		let counter = Arc::clone(&counter);
		async move {
			counter.fetch_add(1, Ordering::SeqCst);
			Ok(Response::no_content())
		}
	});

	// Act
	for _ in 0..3 {
		let request = Request::builder().uri("/ping").build().unwrap();
		handler.handle(request).await.unwrap();
	}

	// Assert
	assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_forbidden_error_maps_to_403() {
	// Arrange
	let handler = handler_fn(|_request: Request| async {
		Err(HttpError::Forbidden("missing capability".to_string()))
	});
	let request = Request::builder().uri("/locked").build().unwrap();

	// Act
	let response: Response = handler.handle(request).await.unwrap_err().into();

	// Assert
	assert_eq!(response.status, StatusCode::FORBIDDEN);
	assert_eq!(response.json_body().unwrap()["code"], "forbidden");
}
