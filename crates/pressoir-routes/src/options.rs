//! Route option bags and argument schemas.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use pressoir_http::Request;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::permission::PermissionCallback;

static COMMA_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").unwrap());

/// Sanitizer applied by the host to an incoming argument value.
pub type SanitizeFn = dyn Fn(Value) -> Value + Send + Sync;

/// JSON-schema style type tag for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
	String,
	Integer,
	Number,
	Boolean,
	Array,
	Object,
}

fn is_false(value: &bool) -> bool {
	!*value
}

/// Declared schema for one endpoint argument.
///
/// Serializes into the shape REST hosts expect (`type`, `description`,
/// `default`, `enum`, `required`); the sanitizer is a local callable and is
/// skipped.
///
/// # Examples
///
/// ```
/// use pressoir_routes::{ArgKind, ArgSchema};
///
/// let schema = ArgSchema::string().one_of(["asc", "desc"]).default_value("asc");
/// let json = serde_json::to_value(&schema).unwrap();
/// assert_eq!(json["type"], "string");
/// assert_eq!(json["enum"][1], "desc");
/// ```
#[derive(Clone, Default, Serialize)]
pub struct ArgSchema {
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<ArgKind>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<Value>,
	#[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
	pub choices: Vec<Value>,
	#[serde(skip_serializing_if = "is_false")]
	pub required: bool,
	#[serde(skip)]
	pub sanitize: Option<Arc<SanitizeFn>>,
}

impl ArgSchema {
	pub fn new(kind: ArgKind) -> Self {
		Self {
			kind: Some(kind),
			..Self::default()
		}
	}

	pub fn string() -> Self {
		Self::new(ArgKind::String)
	}

	pub fn integer() -> Self {
		Self::new(ArgKind::Integer)
	}

	pub fn description(mut self, text: impl Into<String>) -> Self {
		self.description = Some(text.into());
		self
	}

	pub fn default_value(mut self, value: impl Into<Value>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Restricts the argument to an enumerated set of values.
	pub fn one_of(mut self, choices: impl IntoIterator<Item = impl Into<Value>>) -> Self {
		self.choices = choices.into_iter().map(Into::into).collect();
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Attaches a sanitizer run by the host before the handler sees the value.
	pub fn sanitize(mut self, f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
		self.sanitize = Some(Arc::new(f));
		self
	}
}

impl fmt::Debug for ArgSchema {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ArgSchema")
			.field("kind", &self.kind)
			.field("description", &self.description)
			.field("default", &self.default)
			.field("choices", &self.choices)
			.field("required", &self.required)
			.field("sanitize", &self.sanitize.as_ref().map(|_| "<fn>"))
			.finish()
	}
}

/// Splits a comma-separated string value into an array of strings.
///
/// Non-string values pass through unchanged.
///
/// # Examples
///
/// ```
/// use pressoir_routes::comma_list;
/// use serde_json::json;
///
/// assert_eq!(comma_list(json!("id, title,status")), json!(["id", "title", "status"]));
/// assert_eq!(comma_list(json!(42)), json!(42));
/// ```
pub fn comma_list(value: Value) -> Value {
	match value {
		Value::String(text) => Value::Array(
			COMMA_SPLIT_RE
				.split(&text)
				.map(|part| Value::String(part.to_string()))
				.collect(),
		),
		other => other,
	}
}

/// Options attached to a route declaration.
///
/// Recognized keys are typed fields; anything else rides along in `extra`
/// and reaches the registration sink untouched.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
	/// Permission policy; defaults to the shared slot's current policy.
	pub permission: PermissionCallback,
	/// Argument schemas keyed by argument name.
	pub args: BTreeMap<String, ArgSchema>,
	/// Ask the host to replace an existing route with the same pattern.
	pub override_existing: bool,
	/// Unrecognized pass-through options.
	pub extra: BTreeMap<String, Value>,
}

impl RouteOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an explicit permission policy.
	pub fn with_permission(mut self, policy: impl Fn(&Request) -> bool + Send + Sync + 'static) -> Self {
		self.permission = PermissionCallback::explicit(policy);
		self
	}

	pub fn with_arg(mut self, name: impl Into<String>, schema: ArgSchema) -> Self {
		self.args.insert(name.into(), schema);
		self
	}

	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}

	pub fn with_override(mut self) -> Self {
		self.override_existing = true;
		self
	}

	/// Overlays another bag onto this one; the overlay wins on conflict.
	pub fn merge(mut self, overlay: RouteOptions) -> Self {
		if let PermissionCallback::Explicit(_) = &overlay.permission {
			self.permission = overlay.permission;
		}
		self.args.extend(overlay.args);
		self.override_existing = self.override_existing || overlay.override_existing;
		self.extra.extend(overlay.extra);
		self
	}

	/// Argument schemas serialized for host registration.
	pub fn args_json(&self) -> Value {
		serde_json::to_value(&self.args).unwrap_or(Value::Null)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_arg_schema_serializes_rest_shape() {
		// Arrange
		let schema = ArgSchema::string()
			.description("sort direction")
			.one_of(["asc", "desc"])
			.default_value("asc")
			.required();

		// Act
		let value = serde_json::to_value(&schema).unwrap();

		// Assert
		assert_eq!(
			value,
			json!({
				"type": "string",
				"description": "sort direction",
				"default": "asc",
				"enum": ["asc", "desc"],
				"required": true,
			})
		);
	}

	#[rstest]
	fn test_empty_schema_serializes_to_empty_object() {
		let value = serde_json::to_value(&ArgSchema::default()).unwrap();
		assert_eq!(value, json!({}));
	}

	#[rstest]
	#[case(json!("a,b"), json!(["a", "b"]))]
	#[case(json!("a, b,  c"), json!(["a", "b", "c"]))]
	#[case(json!("solo"), json!(["solo"]))]
	#[case(json!(7), json!(7))]
	fn test_comma_list_sanitizer(#[case] input: Value, #[case] expected: Value) {
		assert_eq!(comma_list(input), expected);
	}

	#[rstest]
	fn test_merge_overlay_wins() {
		// Arrange
		let base = RouteOptions::new()
			.with_arg("page", ArgSchema::integer().default_value(1))
			.with_extra("show_in_index", true);
		let overlay = RouteOptions::new()
			.with_arg("page", ArgSchema::integer().default_value(2))
			.with_permission(|_| false);

		// Act
		let merged = base.merge(overlay);

		// Assert
		assert_eq!(merged.args["page"].default, Some(json!(2)));
		assert_eq!(merged.extra["show_in_index"], json!(true));
		assert!(!merged.permission.is_default());
	}

	#[rstest]
	fn test_merge_keeps_base_permission_when_overlay_is_default() {
		// Arrange
		let base = RouteOptions::new().with_permission(|_| true);

		// Act
		let merged = base.merge(RouteOptions::new());

		// Assert
		assert!(!merged.permission.is_default());
	}
}
