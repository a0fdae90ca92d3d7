//! Host boundary receiving hook registrations.

use crate::entry::HookEntry;

/// Boundary implemented by the embedding host's event dispatcher.
///
/// [`crate::HookTable::register_with`] calls this once per entry, in
/// execution order (ascending priority, insertion order within equal
/// priorities). Entries are `Clone`, so a sink that outlives the table can
/// keep its own copies.
pub trait HookSink {
	fn register_hook(&mut self, entry: &HookEntry);
}
