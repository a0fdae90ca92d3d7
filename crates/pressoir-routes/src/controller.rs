//! Controller trait and the name-to-factory registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use pressoir_http::{HttpResult, Request, Response};

/// A controller groups related actions behind string names.
///
/// Implementations route the action name to their own logic and return
/// [`pressoir_http::HttpError::MethodNotFound`] for names they do not
/// expose; the route invoker recovers that into a structured 404 response
/// instead of failing the dispatch.
#[async_trait]
pub trait Controller: Send + Sync {
	async fn dispatch(&self, action: &str, request: Request) -> HttpResult<Response>;
}

type ControllerFactory = dyn Fn() -> Box<dyn Controller> + Send + Sync;

/// Registry mapping controller names to factories, carrying the
/// controller-namespace slot.
///
/// A fresh instance is constructed for every dispatch; controllers never
/// keep cross-request state through the registry.
pub struct ControllerRegistry {
	namespace: RwLock<String>,
	factories: RwLock<HashMap<String, Arc<ControllerFactory>>>,
}

impl Default for ControllerRegistry {
	fn default() -> Self {
		Self {
			namespace: RwLock::new(String::new()),
			factories: RwLock::new(HashMap::new()),
		}
	}
}

impl ControllerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the namespace used to qualify bare controller names.
	pub fn set_namespace(&self, namespace: impl Into<String>) {
		*self.namespace.write() = namespace.into();
	}

	pub fn namespace(&self) -> String {
		self.namespace.read().clone()
	}

	/// Registers a factory under a controller name.
	pub fn register<F>(&self, name: impl Into<String>, factory: F)
	where
		F: Fn() -> Box<dyn Controller> + Send + Sync + 'static,
	{
		self.factories.write().insert(name.into(), Arc::new(factory));
	}

	/// Registers a `Default`-constructible controller type under a name.
	pub fn register_default<C>(&self, name: impl Into<String>)
	where
		C: Controller + Default + 'static,
	{
		self.register(name, || Box::new(C::default()) as Box<dyn Controller>);
	}

	/// Constructs a fresh instance for the given name.
	///
	/// The raw name is tried first; a miss is retried with the namespace
	/// prefix as `{namespace}::{name}`.
	pub fn resolve(&self, name: &str) -> Option<Box<dyn Controller>> {
		let factories = self.factories.read();
		if let Some(factory) = factories.get(name) {
			return Some(factory());
		}
		let namespace = self.namespace.read().clone();
		if namespace.is_empty() {
			return None;
		}
		factories
			.get(&format!("{namespace}::{name}"))
			.map(|factory| factory())
	}
}

impl fmt::Debug for ControllerRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ControllerRegistry")
			.field("namespace", &*self.namespace.read())
			.field("controllers", &self.factories.read().len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pressoir_http::HttpError;
	use rstest::rstest;

	#[derive(Default)]
	struct CountingController {
		serial: u64,
	}

	#[async_trait]
	impl Controller for CountingController {
		async fn dispatch(&self, action: &str, _request: Request) -> HttpResult<Response> {
			match action {
				"index" => Ok(Response::ok().with_body(self.serial.to_string())),
				other => Err(HttpError::MethodNotFound(other.to_string())),
			}
		}
	}

	#[rstest]
	fn test_resolve_prefers_the_raw_name() {
		// Arrange
		let registry = ControllerRegistry::new();
		registry.register_default::<CountingController>("Widgets");

		// Act & Assert
		assert!(registry.resolve("Widgets").is_some());
		assert!(registry.resolve("Missing").is_none());
	}

	#[rstest]
	fn test_resolve_falls_back_to_namespace_qualified_name() {
		// Arrange
		let registry = ControllerRegistry::new();
		registry.register_default::<CountingController>("shop::Widgets");

		// Act & Assert
		assert!(registry.resolve("Widgets").is_none());

		registry.set_namespace("shop");
		assert!(registry.resolve("Widgets").is_some());
		assert!(registry.resolve("shop::Widgets").is_some());
	}

	#[rstest]
	fn test_each_resolve_constructs_a_fresh_instance() {
		// Arrange
		use std::sync::atomic::{AtomicU64, Ordering};
		let built = Arc::new(AtomicU64::new(0));
		let registry = ControllerRegistry::new();
		let counter = Arc::clone(&built);
		registry.register("Widgets", move || {
			Box::new(CountingController {
				serial: counter.fetch_add(1, Ordering::SeqCst),
			}) as Box<dyn Controller>
		});

		// Act
		registry.resolve("Widgets");
		registry.resolve("Widgets");

		// Assert
		assert_eq!(built.load(Ordering::SeqCst), 2);
	}
}
