//! Path pattern compiler.
//!
//! Turns a mustache-style path template such as `posts/{id}/comments/{c?}`
//! into a regex with named capture groups, keeping token names in encounter
//! order so hosts can map positional matches back to parameters.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RouteError;

/// One path token, with its preceding separator when it has one.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/?\{\w+\??\}").unwrap());

/// A route pattern after token substitution.
///
/// Each `{name}` becomes `(?P<name>[^/]+)`; each `{name?}` becomes
/// `(/(?P<name>[^/]+))?` so an absent trailing segment leaves no dangling
/// separator. Optional tokens must form the contiguous tail of the pattern.
///
/// # Examples
///
/// ```
/// use pressoir_routes::CompiledPattern;
///
/// let compiled = CompiledPattern::compile("widgets/{id}").unwrap();
/// assert_eq!(compiled.regex(), "widgets/(?P<id>[^/]+)");
/// assert_eq!(compiled.param_names(), ["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
	regex: String,
	param_names: Vec<String>,
}

impl CompiledPattern {
	/// Compiles a pattern, substituting tokens left to right.
	///
	/// A tokenless pattern is returned unchanged with an empty name list.
	/// Repeated token names are not deduplicated; each occurrence yields its
	/// own capture group, and the duplicate group name then surfaces as a
	/// [`RouteError::Pattern`] from [`CompiledPattern::matcher`].
	pub fn compile(pattern: &str) -> Result<Self, RouteError> {
		validate_optional_tail(pattern)?;

		let mut working = pattern.to_string();
		let mut param_names = Vec::new();
		while let Some(found) = TOKEN_RE.find(&working) {
			let range = found.range();
			let text = found.as_str();
			let leading_slash = text.starts_with('/');
			let optional = text.ends_with("?}");
			let name = token_name(text);

			let mut replacement = format!("(?P<{name}>[^/]+)");
			if leading_slash {
				replacement.insert(0, '/');
			}
			if optional {
				replacement = format!("({replacement})?");
			}

			param_names.push(name.to_string());
			working.replace_range(range, &replacement);
		}

		Ok(Self {
			regex: working,
			param_names,
		})
	}

	/// The substituted pattern, unanchored.
	pub fn regex(&self) -> &str {
		&self.regex
	}

	/// Token names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Consumes the compiled form into its regex string and name list.
	pub fn into_parts(self) -> (String, Vec<String>) {
		(self.regex, self.param_names)
	}

	/// Builds the anchored (`^...$`) matcher for in-process matching.
	pub fn matcher(&self) -> Result<Regex, RouteError> {
		Regex::new(&format!("^{}$", self.regex)).map_err(|e| RouteError::Pattern(e.to_string()))
	}

	/// Matches a path and extracts named captures.
	///
	/// Returns `Ok(None)` when the path does not match. Optional tokens that
	/// did not participate are omitted from the map.
	pub fn extract_params(&self, path: &str) -> Result<Option<HashMap<String, String>>, RouteError> {
		let matcher = self.matcher()?;
		Ok(matcher.captures(path).map(|captures| {
			self.param_names
				.iter()
				.filter_map(|name| {
					captures
						.name(name)
						.map(|found| (name.clone(), found.as_str().to_string()))
				})
				.collect()
		}))
	}
}

fn token_name(text: &str) -> &str {
	text.trim_start_matches('/')
		.trim_start_matches('{')
		.trim_end_matches('}')
		.trim_end_matches('?')
}

/// Rejects optional tokens that do not form the contiguous tail of the
/// pattern, e.g. `a/{b?}/c` or `a/{b?}/{c}`.
fn validate_optional_tail(pattern: &str) -> Result<(), RouteError> {
	let tokens: Vec<(std::ops::Range<usize>, bool, &str)> = TOKEN_RE
		.find_iter(pattern)
		.map(|found| {
			let text = found.as_str();
			(found.range(), text.ends_with("?}"), token_name(text))
		})
		.collect();

	let mut first_optional: Option<&str> = None;
	let mut previous_end = 0usize;
	for (range, optional, name) in &tokens {
		if let Some(first) = first_optional {
			if !optional || range.start != previous_end {
				return Err(RouteError::OptionalNotTerminal(first.to_string()));
			}
		}
		if *optional && first_optional.is_none() {
			first_optional = Some(name);
		}
		previous_end = range.end;
	}
	if let Some(first) = first_optional {
		if previous_end != pattern.len() {
			return Err(RouteError::OptionalNotTerminal(first.to_string()));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("widgets", "widgets", Vec::new())]
	#[case("widgets/{id}", "widgets/(?P<id>[^/]+)", vec!["id"])]
	#[case("widgets/{id}/edit", "widgets/(?P<id>[^/]+)/edit", vec!["id"])]
	#[case("widgets/{id?}", "widgets(/(?P<id>[^/]+))?", vec!["id"])]
	#[case(
		"posts/{post}/comments/{comment?}",
		"posts/(?P<post>[^/]+)/comments(/(?P<comment>[^/]+))?",
		vec!["post", "comment"]
	)]
	#[case("{id}", "(?P<id>[^/]+)", vec!["id"])]
	#[case("{id?}", "((?P<id>[^/]+))?", vec!["id"])]
	fn test_token_substitution(
		#[case] pattern: &str,
		#[case] regex: &str,
		#[case] names: Vec<&str>,
	) {
		// Act
		let compiled = CompiledPattern::compile(pattern).unwrap();

		// Assert
		assert_eq!(compiled.regex(), regex);
		assert_eq!(compiled.param_names(), names.as_slice());
	}

	#[rstest]
	#[case("a/{b?}/c")]
	#[case("a/{b?}/{c}")]
	#[case("a/{b?}x")]
	fn test_optional_token_must_be_terminal(#[case] pattern: &str) {
		let error = CompiledPattern::compile(pattern).unwrap_err();
		assert!(matches!(error, RouteError::OptionalNotTerminal(name) if name == "b"));
	}

	#[rstest]
	fn test_contiguous_optional_tail_is_allowed() {
		let compiled = CompiledPattern::compile("a/{b?}/{c?}").unwrap();
		assert_eq!(compiled.param_names(), ["b", "c"]);
		assert_eq!(compiled.regex(), "a(/(?P<b>[^/]+))?(/(?P<c>[^/]+))?");
	}

	#[rstest]
	fn test_required_capture_spans_between_separators() {
		// Arrange
		let compiled = CompiledPattern::compile("a/{x}/b").unwrap();

		// Act
		let params = compiled.extract_params("a/hello-7/b").unwrap().unwrap();

		// Assert
		assert_eq!(params["x"], "hello-7");
		assert!(compiled.extract_params("a//b").unwrap().is_none());
		assert!(compiled.extract_params("a/x/y/b").unwrap().is_none());
	}

	#[rstest]
	fn test_optional_tail_matches_with_and_without_segment() {
		// Arrange
		let compiled = CompiledPattern::compile("widgets/{id?}").unwrap();

		// Act & Assert
		let with = compiled.extract_params("widgets/9").unwrap().unwrap();
		assert_eq!(with["id"], "9");

		let without = compiled.extract_params("widgets").unwrap().unwrap();
		assert!(without.is_empty());

		// No dangling separator requirement
		assert!(compiled.extract_params("widgets/").unwrap().is_none());
	}

	#[rstest]
	fn test_tokenless_pattern_is_unchanged() {
		let compiled = CompiledPattern::compile("widgets/all").unwrap();
		assert_eq!(compiled.regex(), "widgets/all");
		assert!(compiled.param_names().is_empty());
	}

	#[rstest]
	fn test_repeated_names_keep_both_groups_and_fail_in_matcher() {
		// Arrange
		let compiled = CompiledPattern::compile("{id}/{id}").unwrap();
		assert_eq!(compiled.param_names(), ["id", "id"]);

		// Act
		let result = compiled.matcher();

		// Assert
		assert!(matches!(result, Err(RouteError::Pattern(_))));
	}

	#[rstest]
	fn test_capture_rejects_separator_characters() {
		let compiled = CompiledPattern::compile("widgets/{id}").unwrap();
		assert!(compiled.extract_params("widgets/1/2").unwrap().is_none());
	}
}
