//! Declaration-time error types.

use thiserror::Error;

/// Errors raised while building the route table.
///
/// Every variant except [`RouteError::Pattern`] is a configuration error
/// raised synchronously at declaration time; the embedding host is expected
/// to abort plugin initialization on any of them.
#[derive(Debug, Error)]
pub enum RouteError {
	/// The table was already finalized.
	#[error("too late to create new routes")]
	Finalized,

	/// A comma-separated method list contained an unknown verb.
	#[error("unknown request method: {0}")]
	UnknownMethod(String),

	/// A single symbolic method name is neither a verb nor a known alias.
	#[error("unknown route alias: {0}")]
	UnknownAlias(String),

	/// A handler string does not look like `Controller@method`.
	#[error("improperly formed controller reference: {0}; expected ControllerName@methodName")]
	MalformedHandler(String),

	/// A resource action name is not in the fixed catalog.
	#[error("action [{0}] is unrecognized; expected one of index, create, store, show, edit, update, destroy")]
	UnknownAction(String),

	/// An optional token is followed by required pattern text.
	#[error("optional token {{{0}?}} may only appear in the trailing segment group")]
	OptionalNotTerminal(String),

	/// The anchored matcher for a compiled pattern failed to build.
	#[error("pattern failed to compile: {0}")]
	Pattern(String),
}
