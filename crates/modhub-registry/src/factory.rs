//! Component factory — builds instances of resolved components.

use std::sync::Arc;

use tracing::debug;

use modhub_core::error::AppError;
use modhub_core::result::AppResult;
use modhub_core::traits::{Capability, Component, ComponentSpace};

/// Constructs zero-argument component instances.
#[derive(Debug)]
pub struct ComponentFactory {
    space: Arc<dyn ComponentSpace>,
}

impl ComponentFactory {
    /// Creates a factory over `space`.
    pub fn new(space: Arc<dyn ComponentSpace>) -> Self {
        Self { space }
    }

    /// Instantiates `qualified_name`.
    ///
    /// When `capability` is given, the constructed instance itself must
    /// implement it, independent of what the component space declared.
    pub fn instantiate(
        &self,
        qualified_name: &str,
        capability: Option<&Capability>,
    ) -> AppResult<Arc<dyn Component>> {
        let instance = self
            .space
            .construct(qualified_name)
            .ok_or_else(|| AppError::not_found(format!("no component named '{qualified_name}'")))?;

        if let Some(capability) = capability {
            if !instance.implements(capability) {
                return Err(AppError::capability_mismatch(format!(
                    "instance of '{qualified_name}' does not implement '{capability}'"
                )));
            }
        }

        debug!(component = %qualified_name, "Component instantiated");
        Ok(instance)
    }
}
