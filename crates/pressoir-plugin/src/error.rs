//! Plugin error types.

use pressoir_routes::RouteError;
use thiserror::Error;

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

/// Errors raised while validating metadata, booting, or running lifecycle
/// callbacks.
///
/// Everything except [`PluginError::Lifecycle`] is a configuration error the
/// embedding host should treat as fatal to plugin initialization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PluginError {
	/// The plugin name failed validation.
	#[error("invalid plugin name: {0}")]
	InvalidName(String),

	/// The plugin version is not valid semver.
	#[error("invalid plugin version: {0}")]
	InvalidVersion(String),

	/// A route or rewrite declaration failed while booting.
	#[error(transparent)]
	Route(#[from] RouteError),

	/// An activation or deactivation callback failed.
	#[error("plugin '{plugin}' failed during {phase}: {message}")]
	Lifecycle {
		/// Plugin name.
		plugin: String,
		/// Lifecycle phase (activate, deactivate).
		phase: String,
		/// Error message.
		message: String,
	},
}

impl PluginError {
	/// Builds a lifecycle failure for the given phase.
	pub fn lifecycle(
		plugin: impl Into<String>,
		phase: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		Self::Lifecycle {
			plugin: plugin.into(),
			phase: phase.into(),
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_lifecycle_message_names_plugin_and_phase() {
		// Arrange
		let error = PluginError::lifecycle("shop-manager", "activate", "schema missing");

		// Act & Assert
		assert_eq!(
			error.to_string(),
			"plugin 'shop-manager' failed during activate: schema missing"
		);
	}

	#[rstest]
	fn test_route_errors_pass_through_transparently() {
		// Arrange
		let error: PluginError = RouteError::Finalized.into();

		// Act & Assert
		assert_eq!(error.to_string(), "too late to create new routes");
	}
}
