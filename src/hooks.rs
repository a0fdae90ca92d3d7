//! Hooks module.
//!
//! Priority-ordered action and filter tables with local dispatch, handed to
//! the host through the [`HookSink`](crate::HookSink) boundary.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pressoir::hooks::HookTable;
//!
//! let mut table = HookTable::new();
//! table.action("widgets_saved", |args| {
//!     println!("saved: {args:?}");
//! });
//! ```

pub use pressoir_hooks::*;
