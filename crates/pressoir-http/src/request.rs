use crate::error::{HttpError, HttpResult};
use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// HTTP request representation handed to handlers and controllers.
///
/// Path parameters are filled in by the embedding host after it matches a
/// compiled route pattern; query parameters are parsed from the URI when the
/// request is built.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Named captures extracted from the matched path pattern.
	pub path_params: HashMap<String, String>,
	query_params: HashMap<String, String>,
}

impl Request {
	/// Creates a new [`RequestBuilder`].
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/widgets/7")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.path(), "/widgets/7");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Parse query parameters from a URI.
	pub(crate) fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						// Split on first '=' only to preserve '=' in values
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Returns the request path.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Returns a raw query parameter value.
	pub fn query_param(&self, key: &str) -> Option<&str> {
		self.query_params.get(key).map(String::as_str)
	}

	/// Returns all raw query parameters.
	pub fn query_params(&self) -> &HashMap<String, String> {
		&self.query_params
	}

	/// Returns URL-decoded query parameters.
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/search?name=John%20Doe")
	///     .build()
	///     .unwrap();
	///
	/// let decoded = request.decoded_query_params();
	/// assert_eq!(decoded.get("name"), Some(&"John Doe".to_string()));
	/// ```
	pub fn decoded_query_params(&self) -> HashMap<String, String> {
		self.query_params
			.iter()
			.map(|(k, v)| {
				let decoded_key = percent_decode_str(k).decode_utf8_lossy().to_string();
				let decoded_value = percent_decode_str(v).decode_utf8_lossy().to_string();
				(decoded_key, decoded_value)
			})
			.collect()
	}

	/// Returns a path parameter captured by the matched pattern.
	pub fn path_param(&self, key: &str) -> Option<&str> {
		self.path_params.get(key).map(String::as_str)
	}

	/// Sets a path parameter (used by hosts when extracting pattern captures).
	///
	/// # Examples
	///
	/// ```
	/// use pressoir_http::Request;
	/// use hyper::Method;
	///
	/// let mut request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/widgets/7")
	///     .build()
	///     .unwrap();
	///
	/// request.set_path_param("id", "7");
	/// assert_eq!(request.path_param("id"), Some("7"));
	/// ```
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}

	/// Deserializes the request body as JSON.
	pub fn json<T: DeserializeOwned>(&self) -> HttpResult<T> {
		serde_json::from_slice(&self.body)
			.map_err(|e| HttpError::BadRequest(format!("invalid json body: {e}")))
	}
}

/// Builder for [`Request`].
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	fn new() -> Self {
		Self {
			method: Method::GET,
			uri: String::from("/"),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Sets the request method.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Sets the request URI.
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	/// Sets the HTTP version.
	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Replaces the header map.
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Sets the request body.
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Builds the request, parsing the URI and its query string.
	pub fn build(self) -> HttpResult<Request> {
		let uri: Uri = self
			.uri
			.parse()
			.map_err(|e| HttpError::InvalidUri(format!("{}: {e}", self.uri)))?;
		let query_params = Request::parse_query_params(&uri);

		Ok(Request {
			method: self.method,
			uri,
			version: self.version,
			headers: self.headers,
			body: self.body,
			path_params: HashMap::new(),
			query_params,
		})
	}
}
