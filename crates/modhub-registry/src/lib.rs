//! # modhub-registry
//!
//! Module registry for ModHub. Provides:
//!
//! - Module discovery from a module root directory
//! - Cached per-module enablement decisions
//! - `module:name` identifier resolution with capability checks
//! - Component instantiation with capability re-validation
//! - Hook discovery (`hooks/hook_<name>.<ext>`) and deterministic dispatch
//!
//! [`ModuleRegistry`] ties the pieces together around one set of
//! collaborators and exposes the `reset` operation used between isolated
//! test runs or configuration reloads.

pub mod catalog;
pub mod discovery;
pub mod enablement;
pub mod factory;
pub mod fs;
pub mod hooks;
pub mod registry;
pub mod resolver;

pub use catalog::ComponentCatalog;
pub use discovery::ModuleDiscovery;
pub use enablement::{EnablementResolver, StaticEnablement};
pub use factory::ComponentFactory;
pub use fs::LocalFs;
pub use hooks::{
    CallableTable, DispatchOutcome, HookDispatcher, HookFn, HookImplementation, HookLoader,
    HookPayload, HookRegistry,
};
pub use registry::{ModuleInfo, ModuleRegistry, ModuleRegistryBuilder};
pub use resolver::{IdentifierResolver, ResolvedIdentifier};
