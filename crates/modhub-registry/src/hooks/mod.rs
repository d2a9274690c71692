//! Hook system — discovery, callable lookup, and dispatch.

pub mod definitions;
pub mod dispatcher;
pub mod loader;
pub mod registry;

pub use definitions::{DispatchOutcome, HookImplementation, HookPayload, callable_id};
pub use dispatcher::HookDispatcher;
pub use loader::{CallableTable, HookFn, HookLoader};
pub use registry::{HookMap, HookRegistry};
