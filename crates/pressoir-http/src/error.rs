//! Error types for the HTTP layer.

use thiserror::Error;

/// Result alias for HTTP-layer operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors produced while building requests or dispatching handlers.
#[derive(Debug, Error)]
pub enum HttpError {
	/// The request could not be parsed or understood.
	#[error("bad request: {0}")]
	BadRequest(String),

	/// The caller is not allowed to perform the request.
	#[error("forbidden: {0}")]
	Forbidden(String),

	/// No resource matched the request.
	#[error("not found: {0}")]
	NotFound(String),

	/// A controller exists but does not expose the requested action.
	///
	/// Route invokers recover this variant into a structured 404 response
	/// instead of propagating it.
	#[error("method not found: {0}")]
	MethodNotFound(String),

	/// A URI string could not be parsed.
	#[error("invalid uri: {0}")]
	InvalidUri(String),

	/// A value could not be serialized into a response body.
	#[error("serialization error: {0}")]
	Serialization(String),

	/// An unexpected failure inside a handler.
	#[error("internal error: {0}")]
	Internal(String),
}

impl HttpError {
	/// Maps the error to the HTTP status code it should surface as.
	pub fn status_code(&self) -> u16 {
		match self {
			HttpError::BadRequest(_) | HttpError::InvalidUri(_) => 400,
			HttpError::Forbidden(_) => 403,
			HttpError::NotFound(_) | HttpError::MethodNotFound(_) => 404,
			HttpError::Serialization(_) | HttpError::Internal(_) => 500,
		}
	}

	/// Machine-readable reason code used in JSON error bodies.
	pub fn reason_code(&self) -> &'static str {
		match self {
			HttpError::BadRequest(_) => "bad_request",
			HttpError::Forbidden(_) => "forbidden",
			HttpError::NotFound(_) => "not_found",
			HttpError::MethodNotFound(_) => "method_not_found",
			HttpError::InvalidUri(_) => "invalid_uri",
			HttpError::Serialization(_) => "serialization_error",
			HttpError::Internal(_) => "internal_error",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(HttpError::BadRequest("broken body".into()), 400, "bad_request")]
	#[case(HttpError::Forbidden("no access".into()), 403, "forbidden")]
	#[case(HttpError::NotFound("no such route".into()), 404, "not_found")]
	#[case(HttpError::MethodNotFound("Widget@missing".into()), 404, "method_not_found")]
	#[case(HttpError::InvalidUri("::".into()), 400, "invalid_uri")]
	#[case(HttpError::Serialization("bad map key".into()), 500, "serialization_error")]
	#[case(HttpError::Internal("boom".into()), 500, "internal_error")]
	fn test_status_and_reason_codes(
		#[case] error: HttpError,
		#[case] status: u16,
		#[case] reason: &str,
	) {
		assert_eq!(error.status_code(), status);
		assert_eq!(error.reason_code(), reason);
	}

	#[rstest]
	fn test_error_display_is_lowercase_prefixed() {
		// Arrange
		let error = HttpError::MethodNotFound("Widget@missing".into());

		// Act & Assert
		assert_eq!(error.to_string(), "method not found: Widget@missing");
	}
}
