//! HTTP method sets and the symbolic alias table.

use std::fmt;

use hyper::Method;

use crate::error::RouteError;

/// Ordered, deduplicated set of HTTP verbs attached to a route.
///
/// Built either from one of the named constructors or by parsing a
/// case-insensitive comma-separated spec such as `"PUT, PATCH"`. A single
/// token is first checked against the symbolic alias table (`readable`,
/// `creatable`, `editable`, `deletable`, `all`/`allMethods`,
/// `any`/`anyMethods`); alias names are case-sensitive, verbs are not.
///
/// # Examples
///
/// ```
/// use pressoir_routes::MethodSet;
///
/// assert_eq!(MethodSet::parse("creatable").unwrap(), MethodSet::post());
/// assert_eq!(MethodSet::parse("put, patch").unwrap().to_string(), "PUT, PATCH");
/// assert!(MethodSet::parse("fetch").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet(Vec<Method>);

impl MethodSet {
	/// Builds a set from verbs, keeping first-seen order and dropping
	/// duplicates.
	pub fn of(methods: impl IntoIterator<Item = Method>) -> Self {
		let mut unique = Vec::new();
		for method in methods {
			if !unique.contains(&method) {
				unique.push(method);
			}
		}
		Self(unique)
	}

	/// GET only.
	pub fn get() -> Self {
		Self::of([Method::GET])
	}

	/// POST only.
	pub fn post() -> Self {
		Self::of([Method::POST])
	}

	/// PUT only.
	pub fn put() -> Self {
		Self::of([Method::PUT])
	}

	/// PATCH only.
	pub fn patch() -> Self {
		Self::of([Method::PATCH])
	}

	/// DELETE only.
	pub fn delete() -> Self {
		Self::of([Method::DELETE])
	}

	/// Alias for GET.
	pub fn readable() -> Self {
		Self::get()
	}

	/// Alias for POST.
	pub fn creatable() -> Self {
		Self::post()
	}

	/// POST, PUT and PATCH.
	pub fn editable() -> Self {
		Self::of([Method::POST, Method::PUT, Method::PATCH])
	}

	/// Alias for DELETE.
	pub fn deletable() -> Self {
		Self::delete()
	}

	/// The five mutating-and-reading verbs: GET, POST, PUT, PATCH, DELETE.
	pub fn all() -> Self {
		Self::of([
			Method::GET,
			Method::POST,
			Method::PUT,
			Method::PATCH,
			Method::DELETE,
		])
	}

	/// All seven supported verbs, adding OPTIONS and HEAD.
	pub fn any() -> Self {
		Self::of([
			Method::GET,
			Method::POST,
			Method::PUT,
			Method::PATCH,
			Method::DELETE,
			Method::OPTIONS,
			Method::HEAD,
		])
	}

	fn alias(token: &str) -> Option<Self> {
		match token {
			"readable" => Some(Self::readable()),
			"creatable" => Some(Self::creatable()),
			"editable" => Some(Self::editable()),
			"deletable" => Some(Self::deletable()),
			"all" | "allMethods" => Some(Self::all()),
			"any" | "anyMethods" => Some(Self::any()),
			_ => None,
		}
	}

	/// Parses a method spec string.
	///
	/// A spec without a comma is tried against the alias table first; a
	/// remaining single token that is not a verb fails with
	/// [`RouteError::UnknownAlias`], while an unknown verb inside a comma
	/// list fails with [`RouteError::UnknownMethod`].
	pub fn parse(spec: &str) -> Result<Self, RouteError> {
		let trimmed = spec.trim();
		let single = !trimmed.contains(',');
		if single {
			if let Some(set) = Self::alias(trimmed) {
				return Ok(set);
			}
		}

		let mut methods = Vec::new();
		for token in trimmed.split(',') {
			let token = token.trim();
			let method = match token.to_ascii_uppercase().as_str() {
				"GET" => Method::GET,
				"POST" => Method::POST,
				"PUT" => Method::PUT,
				"PATCH" => Method::PATCH,
				"DELETE" => Method::DELETE,
				"OPTIONS" => Method::OPTIONS,
				"HEAD" => Method::HEAD,
				_ => {
					return Err(if single {
						RouteError::UnknownAlias(trimmed.to_string())
					} else {
						RouteError::UnknownMethod(token.to_string())
					});
				}
			};
			if !methods.contains(&method) {
				methods.push(method);
			}
		}
		Ok(Self(methods))
	}

	/// Verbs in declaration order.
	pub fn as_slice(&self) -> &[Method] {
		&self.0
	}

	pub fn contains(&self, method: &Method) -> bool {
		self.0.contains(method)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for MethodSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}",
			self.0
				.iter()
				.map(Method::as_str)
				.collect::<Vec<_>>()
				.join(", ")
		)
	}
}

impl<'a> IntoIterator for &'a MethodSet {
	type Item = &'a Method;
	type IntoIter = std::slice::Iter<'a, Method>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("GET", MethodSet::get())]
	#[case("get", MethodSet::get())]
	#[case("Put, Patch", MethodSet::of([Method::PUT, Method::PATCH]))]
	#[case("readable", MethodSet::get())]
	#[case("creatable", MethodSet::post())]
	#[case("editable", MethodSet::of([Method::POST, Method::PUT, Method::PATCH]))]
	#[case("deletable", MethodSet::delete())]
	#[case("all", MethodSet::all())]
	#[case("allMethods", MethodSet::all())]
	#[case("any", MethodSet::any())]
	#[case("anyMethods", MethodSet::any())]
	fn test_parse_verbs_and_aliases(#[case] spec: &str, #[case] expected: MethodSet) {
		assert_eq!(MethodSet::parse(spec).unwrap(), expected);
	}

	#[rstest]
	fn test_alias_names_are_case_sensitive() {
		// "READABLE" is not in the alias table and is not a verb
		let error = MethodSet::parse("READABLE").unwrap_err();
		assert!(matches!(error, RouteError::UnknownAlias(_)));
	}

	#[rstest]
	fn test_single_unknown_token_is_an_alias_error() {
		let error = MethodSet::parse("bogus").unwrap_err();
		assert!(matches!(error, RouteError::UnknownAlias(_)));
	}

	#[rstest]
	fn test_unknown_verb_in_list_is_a_method_error() {
		let error = MethodSet::parse("GET,FETCH").unwrap_err();
		assert!(matches!(error, RouteError::UnknownMethod(token) if token == "FETCH"));
	}

	#[rstest]
	fn test_all_and_any_sets() {
		assert_eq!(MethodSet::all().len(), 5);
		assert_eq!(MethodSet::any().len(), 7);
		assert!(MethodSet::any().contains(&Method::OPTIONS));
		assert!(MethodSet::any().contains(&Method::HEAD));
		assert!(!MethodSet::all().contains(&Method::OPTIONS));
	}

	#[rstest]
	fn test_duplicate_verbs_collapse() {
		let set = MethodSet::parse("GET,get, GET").unwrap();
		assert_eq!(set, MethodSet::get());
	}

	#[rstest]
	fn test_display_joins_with_comma() {
		assert_eq!(MethodSet::editable().to_string(), "POST, PUT, PATCH");
	}
}
