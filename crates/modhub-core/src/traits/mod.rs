//! Collaborator traits defined in `modhub-core` and implemented by other crates.

pub mod component;
pub mod enablement;
pub mod filesystem;

pub use component::{Capability, Component, ComponentSpace};
pub use enablement::{EnablementConfig, EnablementSource};
pub use filesystem::ModuleFs;
