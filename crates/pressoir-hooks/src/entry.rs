//! Hook entries: one explicit `(event, kind, priority, handler)` declaration.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Action handler: runs for side effects against the event arguments.
pub type ActionFn = dyn Fn(&[Value]) + Send + Sync;

/// Filter handler: threads a value, optionally consulting extra arguments.
pub type FilterFn = dyn Fn(Value, &[Value]) -> Value + Send + Sync;

/// Whether an entry observes an event or transforms a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
	Action,
	Filter,
}

#[derive(Clone)]
enum HookHandler {
	Action(Arc<ActionFn>),
	Filter(Arc<FilterFn>),
}

/// One declared lifecycle hook.
///
/// Entries are explicit data: the event name, the handler, a priority
/// (lower runs first, default 10), and the number of arguments the handler
/// accepts (default 1). Nothing is inferred from names or signatures.
///
/// For filters, `accepted_args` counts the threaded value itself, so the
/// default of 1 hands the handler the value and no extras.
///
/// # Examples
///
/// ```
/// use pressoir_hooks::HookEntry;
///
/// let entry = HookEntry::action("init", |_args| {}).with_priority(5);
/// assert_eq!(entry.event(), "init");
/// assert_eq!(entry.priority(), 5);
/// ```
#[derive(Clone)]
pub struct HookEntry {
	event: String,
	priority: i64,
	accepted_args: usize,
	handler: HookHandler,
}

impl HookEntry {
	/// Declares an action hook with default priority and arity.
	pub fn action(event: impl Into<String>, handler: impl Fn(&[Value]) + Send + Sync + 'static) -> Self {
		Self {
			event: event.into(),
			priority: 10,
			accepted_args: 1,
			handler: HookHandler::Action(Arc::new(handler)),
		}
	}

	/// Declares a filter hook with default priority and arity.
	pub fn filter(
		event: impl Into<String>,
		handler: impl Fn(Value, &[Value]) -> Value + Send + Sync + 'static,
	) -> Self {
		Self {
			event: event.into(),
			priority: 10,
			accepted_args: 1,
			handler: HookHandler::Filter(Arc::new(handler)),
		}
	}

	/// Sets the execution priority; lower values run first.
	pub fn with_priority(mut self, priority: i64) -> Self {
		self.priority = priority;
		self
	}

	/// Sets how many arguments the handler accepts.
	pub fn with_accepted_args(mut self, accepted_args: usize) -> Self {
		self.accepted_args = accepted_args;
		self
	}

	pub fn event(&self) -> &str {
		&self.event
	}

	pub fn kind(&self) -> HookKind {
		match self.handler {
			HookHandler::Action(_) => HookKind::Action,
			HookHandler::Filter(_) => HookKind::Filter,
		}
	}

	pub fn priority(&self) -> i64 {
		self.priority
	}

	pub fn accepted_args(&self) -> usize {
		self.accepted_args
	}

	/// Runs an action entry, truncating the arguments to `accepted_args`.
	///
	/// Filter entries do not run.
	pub fn call_action(&self, args: &[Value]) {
		if let HookHandler::Action(handler) = &self.handler {
			let take = self.accepted_args.min(args.len());
			handler(&args[..take]);
		}
	}

	/// Threads a value through a filter entry.
	///
	/// The extra arguments are truncated to `accepted_args - 1` since the
	/// value occupies the first slot. Action entries return the value
	/// unchanged without running.
	pub fn call_filter(&self, value: Value, args: &[Value]) -> Value {
		match &self.handler {
			HookHandler::Filter(handler) => {
				let take = self.accepted_args.saturating_sub(1).min(args.len());
				handler(value, &args[..take])
			}
			HookHandler::Action(_) => value,
		}
	}
}

impl fmt::Debug for HookEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HookEntry")
			.field("event", &self.event)
			.field("kind", &self.kind())
			.field("priority", &self.priority)
			.field("accepted_args", &self.accepted_args)
			.finish()
	}
}
