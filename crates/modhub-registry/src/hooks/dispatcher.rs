//! Hook dispatcher — invokes a hook across every enabled module.
//!
//! - Modules are visited in lexicographic order, never filesystem order.
//! - Disabled modules and modules without the hook are skipped.
//! - Every implementation receives the same payload by mutable reference,
//!   so changes made by one module are visible to the next.
//! - A registered hook that does not resolve to a callable aborts the pass
//!   with `HookInvalid`. Changes already applied to the payload stay.

use std::sync::Arc;

use tracing::{debug, error, info};

use modhub_core::error::AppError;
use modhub_core::result::AppResult;
use modhub_core::traits::EnablementSource;

use super::definitions::{DispatchOutcome, HookPayload};
use super::loader::HookLoader;
use super::registry::HookRegistry;
use crate::discovery::ModuleDiscovery;
use crate::enablement::EnablementResolver;

/// Dispatches hooks to enabled modules.
#[derive(Debug)]
pub struct HookDispatcher {
    discovery: Arc<ModuleDiscovery>,
    enablement: Arc<EnablementResolver>,
    source: Arc<dyn EnablementSource>,
    hooks: Arc<HookRegistry>,
    loader: Arc<dyn HookLoader>,
}

impl HookDispatcher {
    /// Creates a dispatcher.
    pub fn new(
        discovery: Arc<ModuleDiscovery>,
        enablement: Arc<EnablementResolver>,
        source: Arc<dyn EnablementSource>,
        hooks: Arc<HookRegistry>,
        loader: Arc<dyn HookLoader>,
    ) -> Self {
        Self {
            discovery,
            enablement,
            source,
            hooks,
            loader,
        }
    }

    /// Invokes `hook` in every enabled module that implements it.
    pub fn dispatch(&self, hook: &str, payload: &mut HookPayload) -> AppResult<DispatchOutcome> {
        let mut modules: Vec<String> = self.discovery.list_modules()?.iter().cloned().collect();
        modules.sort();

        debug!(hook = %hook, modules = modules.len(), "Dispatching hook");

        let mut invoked = Vec::new();
        for module in &modules {
            if !self.enablement.is_enabled_from(module, self.source.as_ref())? {
                continue;
            }

            let map = self.hooks.hooks_for(module)?;
            let Some(implementation) = map.get(hook) else {
                continue;
            };

            self.loader.load(implementation)?;
            let Some(function) = self.loader.resolve(&implementation.callable) else {
                error!(
                    hook = %hook,
                    module = %module,
                    callable = %implementation.callable,
                    invoked = invoked.len(),
                    "Hook implementation is not invocable, aborting dispatch"
                );
                return Err(AppError::hook_invalid(format!(
                    "hook '{hook}' in module '{module}' does not resolve to a callable '{}'",
                    implementation.callable
                )));
            };

            debug!(hook = %hook, module = %module, "Invoking hook");
            function(payload);
            invoked.push(module.clone());
        }

        info!(hook = %hook, invoked = invoked.len(), "Hook dispatched");
        Ok(DispatchOutcome {
            hook: hook.to_string(),
            invoked,
        })
    }

    /// Returns the enabled modules implementing `hook`, in dispatch order.
    pub fn implementations(&self, hook: &str) -> AppResult<Vec<String>> {
        let mut modules: Vec<String> = self.discovery.list_modules()?.iter().cloned().collect();
        modules.sort();

        let mut implementing = Vec::new();
        for module in modules {
            if self.enablement.is_enabled_from(&module, self.source.as_ref())?
                && self.hooks.hooks_for(&module)?.contains_key(hook)
            {
                implementing.push(module);
            }
        }
        Ok(implementing)
    }
}
