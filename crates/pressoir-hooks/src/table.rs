//! The hook table: accumulation, ordering, registration, local dispatch.

use serde_json::Value;

use crate::entry::{HookEntry, HookKind};
use crate::sink::HookSink;

/// Accumulates hook entries and hands them out in priority order.
///
/// Entries with equal priority keep their insertion order. The table doubles
/// as a local dispatcher for tests and in-process use; hosts that own their
/// own event loop receive the entries through [`HookTable::register_with`]
/// instead.
///
/// # Examples
///
/// ```
/// use pressoir_hooks::{HookEntry, HookTable};
/// use serde_json::json;
///
/// let mut table = HookTable::new();
/// table.filter("title", |value, _| json!(format!("[{}]", value.as_str().unwrap())));
///
/// assert_eq!(table.apply_filters("title", json!("hello"), &[]), json!("[hello]"));
/// ```
#[derive(Debug, Default)]
pub struct HookTable {
	entries: Vec<HookEntry>,
}

impl HookTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a fully configured entry.
	pub fn add(&mut self, entry: HookEntry) -> &mut Self {
		tracing::debug!(event = entry.event(), kind = ?entry.kind(), priority = entry.priority(), "hook declared");
		self.entries.push(entry);
		self
	}

	/// Declares an action with default priority and arity.
	pub fn action(
		&mut self,
		event: impl Into<String>,
		handler: impl Fn(&[Value]) + Send + Sync + 'static,
	) -> &mut Self {
		self.add(HookEntry::action(event, handler))
	}

	/// Declares a filter with default priority and arity.
	pub fn filter(
		&mut self,
		event: impl Into<String>,
		handler: impl Fn(Value, &[Value]) -> Value + Send + Sync + 'static,
	) -> &mut Self {
		self.add(HookEntry::filter(event, handler))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// All entries ordered by ascending priority, insertion order preserved
	/// within equal priorities.
	pub fn entries(&self) -> Vec<&HookEntry> {
		let mut ordered: Vec<&HookEntry> = self.entries.iter().collect();
		ordered.sort_by_key(|entry| entry.priority());
		ordered
	}

	/// Entries for one event, in execution order.
	pub fn entries_for(&self, event: &str) -> Vec<&HookEntry> {
		self.entries()
			.into_iter()
			.filter(|entry| entry.event() == event)
			.collect()
	}

	/// Hands every entry to the sink in execution order.
	pub fn register_with<S: HookSink + ?Sized>(&self, sink: &mut S) {
		for entry in self.entries() {
			sink.register_hook(entry);
		}
		if !self.entries.is_empty() {
			tracing::info!(hooks = self.entries.len(), "hook table registered");
		}
	}

	/// Runs every matching action handler; returns how many ran.
	///
	/// Each handler sees the argument slice truncated to its own
	/// `accepted_args`.
	pub fn do_action(&self, event: &str, args: &[Value]) -> usize {
		let mut ran = 0;
		for entry in self.entries_for(event) {
			if entry.kind() == HookKind::Action {
				entry.call_action(args);
				ran += 1;
			}
		}
		ran
	}

	/// Threads a value through every matching filter in execution order.
	pub fn apply_filters(&self, event: &str, value: Value, args: &[Value]) -> Value {
		let mut value = value;
		for entry in self.entries_for(event) {
			if entry.kind() == HookKind::Filter {
				value = entry.call_filter(value, args);
			}
		}
		value
	}
}
