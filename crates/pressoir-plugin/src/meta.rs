//! Plugin identity and REST namespace derivation.
//!
//! A plugin is described by a human-readable display name and a semver
//! version. The REST namespace and version segment are derived from those
//! unless overridden, and together they form the base path every route the
//! plugin declares is mounted under.

use crate::error::{PluginError, PluginResult};
use semver::Version;

/// Turns a display name into a URL-safe slug.
///
/// Runs of ASCII alphanumeric characters are lowercased and joined with
/// hyphens; everything else is treated as a separator.
///
/// ```
/// use pressoir_plugin::slug;
///
/// assert_eq!(slug("Shop Manager"), "shop-manager");
/// assert_eq!(slug("My Plugin!"), "my-plugin");
/// ```
pub fn slug(name: &str) -> String {
	name.split(|c: char| !c.is_ascii_alphanumeric())
		.filter(|part| !part.is_empty())
		.map(str::to_ascii_lowercase)
		.collect::<Vec<_>>()
		.join("-")
}

/// Identity and REST mount point of a plugin.
///
/// Built through [`PluginMeta::builder`]; the namespace and version segment
/// are resolved at build time so every accessor is infallible afterwards.
#[derive(Debug, Clone)]
pub struct PluginMeta {
	name: String,
	version: Version,
	description: String,
	rest_namespace: String,
	rest_version: String,
}

impl PluginMeta {
	/// Creates a new [`PluginMetaBuilder`].
	///
	/// # Arguments
	///
	/// * `name` - Display name of the plugin (e.g. "Shop Manager")
	/// * `version` - Plugin version string (semver format)
	///
	/// # Example
	///
	/// ```
	/// use pressoir_plugin::PluginMeta;
	///
	/// let meta = PluginMeta::builder("Shop Manager", "2.3.1")
	///     .description("Storefront management endpoints")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(meta.rest_base(), "shop-manager/v2");
	/// ```
	pub fn builder(name: impl Into<String>, version: impl AsRef<str>) -> PluginMetaBuilder {
		PluginMetaBuilder::new(name, version)
	}

	/// Display name of the plugin.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Plugin version.
	pub fn version(&self) -> &Version {
		&self.version
	}

	/// Human-readable description, empty if none was given.
	pub fn description(&self) -> &str {
		&self.description
	}

	/// REST namespace segment, the slug of the display name unless
	/// overridden.
	pub fn rest_namespace(&self) -> &str {
		&self.rest_namespace
	}

	/// REST version segment, `v{major}` unless overridden.
	pub fn rest_version(&self) -> &str {
		&self.rest_version
	}

	/// Base path routes are mounted under: `{namespace}/{version}`.
	pub fn rest_base(&self) -> String {
		format!("{}/{}", self.rest_namespace, self.rest_version)
	}
}

/// Builder for [`PluginMeta`].
pub struct PluginMetaBuilder {
	name: String,
	version: String,
	description: String,
	rest_namespace: Option<String>,
	rest_version: Option<String>,
}

impl PluginMetaBuilder {
	/// Creates a new builder with required fields.
	pub fn new(name: impl Into<String>, version: impl AsRef<str>) -> Self {
		Self {
			name: name.into(),
			version: version.as_ref().to_string(),
			description: String::new(),
			rest_namespace: None,
			rest_version: None,
		}
	}

	/// Sets the plugin description.
	pub fn description(mut self, desc: impl Into<String>) -> Self {
		self.description = desc.into();
		self
	}

	/// Overrides the REST namespace segment derived from the name.
	pub fn rest_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.rest_namespace = Some(namespace.into());
		self
	}

	/// Overrides the REST version segment derived from the version.
	pub fn rest_version(mut self, version: impl Into<String>) -> Self {
		self.rest_version = Some(version.into());
		self
	}

	/// Builds the [`PluginMeta`], resolving the REST namespace and version.
	///
	/// # Errors
	///
	/// Returns [`PluginError::InvalidName`] if the name is empty, contains
	/// control characters, or yields an empty namespace with no override,
	/// and [`PluginError::InvalidVersion`] if the version is not valid
	/// semver.
	pub fn build(self) -> PluginResult<PluginMeta> {
		if self.name.is_empty() {
			return Err(PluginError::InvalidName(
				"plugin name cannot be empty".to_string(),
			));
		}

		// Control characters would corrupt log lines and URL segments.
		if self.name.chars().any(char::is_control) {
			return Err(PluginError::InvalidName(
				"plugin name must not contain control characters".to_string(),
			));
		}

		let version = Version::parse(&self.version)
			.map_err(|e| PluginError::InvalidVersion(e.to_string()))?;

		let rest_namespace = match self.rest_namespace {
			Some(namespace) => namespace,
			None => slug(&self.name),
		};
		if rest_namespace.is_empty() {
			return Err(PluginError::InvalidName(format!(
				"plugin name '{}' yields an empty REST namespace",
				self.name,
			)));
		}

		let rest_version = self
			.rest_version
			.unwrap_or_else(|| format!("v{}", version.major));

		Ok(PluginMeta {
			name: self.name,
			version,
			description: self.description,
			rest_namespace,
			rest_version,
		})
	}
}
