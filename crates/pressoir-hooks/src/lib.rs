//! Declarative lifecycle hooks.
//!
//! Instead of inferring hook registrations from method names, callers build
//! an explicit [`HookTable`] of [`HookEntry`] values: each entry names its
//! event, whether it is an action or a filter, its priority, and how many
//! arguments the handler accepts. The finished table is handed to the host
//! through the [`HookSink`] boundary; the table also dispatches locally via
//! [`HookTable::do_action`] and [`HookTable::apply_filters`], mirroring the
//! host's semantics for tests and in-process use.

pub mod entry;
pub mod sink;
pub mod table;

pub use entry::{ActionFn, FilterFn, HookEntry, HookKind};
pub use sink::HookSink;
pub use table::HookTable;
