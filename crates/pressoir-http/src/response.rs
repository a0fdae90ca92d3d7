use crate::error::HttpError;
use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}
	/// Create a Response with HTTP 200 OK status
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::ok();
	/// assert_eq!(response.status, StatusCode::OK);
	/// ```
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}
	/// Create a Response with HTTP 201 Created status
	pub fn created() -> Self {
		Self::new(StatusCode::CREATED)
	}
	/// Create a Response with HTTP 204 No Content status
	pub fn no_content() -> Self {
		Self::new(StatusCode::NO_CONTENT)
	}
	/// Create a Response with HTTP 400 Bad Request status
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}
	/// Create a Response with HTTP 401 Unauthorized status
	pub fn unauthorized() -> Self {
		Self::new(StatusCode::UNAUTHORIZED)
	}
	/// Create a Response with HTTP 403 Forbidden status
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::forbidden();
	/// assert_eq!(response.status, StatusCode::FORBIDDEN);
	/// ```
	pub fn forbidden() -> Self {
		Self::new(StatusCode::FORBIDDEN)
	}
	/// Create a Response with HTTP 404 Not Found status
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::not_found();
	/// assert_eq!(response.status, StatusCode::NOT_FOUND);
	/// ```
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}
	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}
	/// Set the response body
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Response;
	///
	/// let response = Response::ok().with_body("Hello, World!");
	/// assert_eq!(&response.body[..], b"Hello, World!");
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}
	/// Add a header to the response
	///
	/// Invalid header names or values are silently ignored.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes()) {
			if let Ok(header_value) = hyper::header::HeaderValue::from_str(value) {
				self.headers.insert(header_name, header_value);
			}
		}
		self
	}
	/// Set the response body to JSON and add the Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Response;
	/// use serde_json::json;
	///
	/// let data = json!({"message": "Hello, World!"});
	/// let response = Response::ok().with_json(&data).unwrap();
	///
	/// assert_eq!(
	///		response.headers.get("content-type").unwrap().to_str().unwrap(),
	///		"application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> crate::HttpResult<Self> {
		let json =
			serde_json::to_vec(data).map_err(|e| HttpError::Serialization(e.to_string()))?;
		self.body = Bytes::from(json);
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("application/json"),
		);
		Ok(self)
	}
	/// Parse the response body as JSON
	///
	/// Mostly useful in tests and host glue inspecting structured bodies.
	pub fn json_body(&self) -> crate::HttpResult<serde_json::Value> {
		serde_json::from_slice(&self.body)
			.map_err(|e| HttpError::Serialization(e.to_string()))
	}
}

impl From<HttpError> for Response {
	fn from(error: HttpError) -> Self {
		let status =
			StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		let body = serde_json::json!({
			"code": error.reason_code(),
			"message": error.to_string(),
			"data": { "status": error.status_code() },
		});

		Response::new(status)
			.with_json(&body)
			.unwrap_or_else(|_| Response::internal_server_error())
	}
}
