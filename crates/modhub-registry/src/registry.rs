//! Module registry — one object holding the discovery, enablement, hook,
//! and resolution components around a shared set of collaborators.
//!
//! The host builds one registry at startup and keeps it for the process
//! lifetime. [`ModuleRegistry::reset`] returns it to its pre-discovery
//! state; callers must not run it concurrently with other operations.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use modhub_core::config::modules::{DEFAULT_CORE_MODULES, ModulesConfig};
use modhub_core::error::{AppError, ErrorKind};
use modhub_core::result::AppResult;
use modhub_core::traits::{
    Capability, Component, ComponentSpace, EnablementConfig, EnablementSource, ModuleFs,
};

use crate::catalog::ComponentCatalog;
use crate::discovery::ModuleDiscovery;
use crate::enablement::{EnablementResolver, StaticEnablement};
use crate::factory::ComponentFactory;
use crate::fs::LocalFs;
use crate::hooks::{
    CallableTable, DispatchOutcome, HookDispatcher, HookLoader, HookMap, HookPayload,
    HookRegistry,
};
use crate::resolver::{IdentifierResolver, ResolvedIdentifier};

/// Summary of one installed module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module name.
    pub name: String,
    /// Whether the module is enabled.
    pub enabled: bool,
    /// Hooks the module implements, sorted.
    pub hooks: Vec<String>,
    /// Why the enablement decision failed, if it did. `enabled` is then
    /// `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Builder for [`ModuleRegistry`].
#[derive(Debug)]
pub struct ModuleRegistryBuilder {
    root: PathBuf,
    fs: Option<Arc<dyn ModuleFs>>,
    source: Option<Arc<dyn EnablementSource>>,
    space: Option<Arc<dyn ComponentSpace>>,
    loader: Option<Arc<dyn HookLoader>>,
}

impl ModuleRegistryBuilder {
    /// Sets the filesystem collaborator. Defaults to [`LocalFs`].
    pub fn filesystem(mut self, fs: Arc<dyn ModuleFs>) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Sets the enablement source. Defaults to the built-in core modules
    /// with no explicit entries.
    pub fn enablement(mut self, source: Arc<dyn EnablementSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the component space. Defaults to an empty [`ComponentCatalog`].
    pub fn components(mut self, space: Arc<dyn ComponentSpace>) -> Self {
        self.space = Some(space);
        self
    }

    /// Sets the hook loader. Defaults to an empty [`CallableTable`].
    pub fn hook_loader(mut self, loader: Arc<dyn HookLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Wires the components together.
    pub fn build(self) -> ModuleRegistry {
        let fs = self.fs.unwrap_or_else(|| Arc::new(LocalFs));
        let source = self.source.unwrap_or_else(|| {
            Arc::new(StaticEnablement::new(EnablementConfig::with_core(
                DEFAULT_CORE_MODULES.iter().copied(),
            )))
        });
        let space = self.space.unwrap_or_else(|| Arc::new(ComponentCatalog::new()));
        let loader = self.loader.unwrap_or_else(|| Arc::new(CallableTable::new()));

        let discovery = Arc::new(ModuleDiscovery::new(self.root, fs));
        let enablement = Arc::new(EnablementResolver::new(discovery.clone()));
        let hooks = Arc::new(HookRegistry::new(discovery.clone()));
        let resolver = IdentifierResolver::new(
            discovery.clone(),
            enablement.clone(),
            source.clone(),
            space.clone(),
        );
        let factory = ComponentFactory::new(space);
        let dispatcher = HookDispatcher::new(
            discovery.clone(),
            enablement.clone(),
            source.clone(),
            hooks.clone(),
            loader,
        );

        ModuleRegistry {
            discovery,
            enablement,
            source,
            hooks,
            resolver,
            factory,
            dispatcher,
        }
    }
}

/// The module registry.
#[derive(Debug)]
pub struct ModuleRegistry {
    discovery: Arc<ModuleDiscovery>,
    enablement: Arc<EnablementResolver>,
    source: Arc<dyn EnablementSource>,
    hooks: Arc<HookRegistry>,
    resolver: IdentifierResolver,
    factory: ComponentFactory,
    dispatcher: HookDispatcher,
}

impl ModuleRegistry {
    /// Starts building a registry over the module root `root`.
    pub fn builder(root: impl Into<PathBuf>) -> ModuleRegistryBuilder {
        ModuleRegistryBuilder {
            root: root.into(),
            fs: None,
            source: None,
            space: None,
            loader: None,
        }
    }

    /// Builds a registry from the `[modules]` configuration section, using
    /// the local filesystem.
    pub fn from_config(
        config: &ModulesConfig,
        space: Arc<dyn ComponentSpace>,
        loader: Arc<dyn HookLoader>,
    ) -> Self {
        info!(root = %config.root.display(), core = ?config.core, "Building module registry");
        Self::builder(config.root.clone())
            .enablement(Arc::new(StaticEnablement::new(config.enablement())))
            .components(space)
            .hook_loader(loader)
            .build()
    }

    /// Installed module names, sorted.
    pub fn list_modules(&self) -> AppResult<Vec<String>> {
        Ok(self.discovery.list_modules()?.iter().cloned().collect())
    }

    /// Whether `module` was discovered under the module root.
    pub fn module_exists(&self, module: &str) -> AppResult<bool> {
        self.discovery.contains(module)
    }

    /// Whether `module` is enabled under the current configuration.
    pub fn is_enabled(&self, module: &str) -> AppResult<bool> {
        self.enablement.is_enabled_from(module, self.source.as_ref())
    }

    /// Whether `module` is enabled under an explicitly supplied configuration.
    pub fn is_enabled_with(&self, module: &str, config: &EnablementConfig) -> AppResult<bool> {
        self.enablement.is_enabled(module, config)
    }

    /// Enabled module names, sorted.
    pub fn enabled_modules(&self) -> AppResult<Vec<String>> {
        let mut enabled = Vec::new();
        for module in self.list_modules()? {
            if self.is_enabled(&module)? {
                enabled.push(module);
            }
        }
        Ok(enabled)
    }

    /// Summary of `module`. Fails with `NotFound` if it is not installed.
    pub fn module_info(&self, module: &str) -> AppResult<ModuleInfo> {
        if !self.module_exists(module)? {
            return Err(AppError::not_found(format!("no module named '{module}'")));
        }
        Ok(ModuleInfo {
            name: module.to_string(),
            enabled: self.is_enabled(module)?,
            hooks: self.hooks_for(module)?.keys().cloned().collect(),
            error: None,
        })
    }

    /// Summaries of all installed modules, sorted by name.
    ///
    /// An invalid enablement entry is reported in that module's `error`
    /// instead of failing the whole listing.
    pub fn modules_info(&self) -> AppResult<Vec<ModuleInfo>> {
        let mut infos = Vec::new();
        for module in self.list_modules()? {
            let (enabled, error) = match self.is_enabled(&module) {
                Ok(enabled) => (enabled, None),
                Err(err) if err.kind == ErrorKind::Configuration => {
                    warn!(
                        module = %module,
                        error = %err.message,
                        "Module enablement is misconfigured"
                    );
                    (false, Some(err.message))
                }
                Err(err) => return Err(err),
            };
            infos.push(ModuleInfo {
                hooks: self.hooks_for(&module)?.keys().cloned().collect(),
                name: module,
                enabled,
                error,
            });
        }
        Ok(infos)
    }

    /// Resolves `identifier` of the given kind.
    pub fn resolve(
        &self,
        identifier: &str,
        kind: &str,
        capability: Option<&Capability>,
    ) -> AppResult<ResolvedIdentifier> {
        self.resolver.resolve(identifier, kind, capability)
    }

    /// Instantiates the component named `qualified_name`.
    pub fn instantiate(
        &self,
        qualified_name: &str,
        capability: Option<&Capability>,
    ) -> AppResult<Arc<dyn Component>> {
        self.factory.instantiate(qualified_name, capability)
    }

    /// Resolves `identifier` and instantiates the result.
    pub fn resolve_and_instantiate(
        &self,
        identifier: &str,
        kind: &str,
        capability: Option<&Capability>,
    ) -> AppResult<Arc<dyn Component>> {
        let resolved = self.resolve(identifier, kind, capability)?;
        self.instantiate(resolved.qualified_name(), capability)
    }

    /// Hooks implemented by `module`.
    pub fn hooks_for(&self, module: &str) -> AppResult<Arc<HookMap>> {
        self.hooks.hooks_for(module)
    }

    /// Enabled modules implementing `hook`, in dispatch order.
    pub fn implementations(&self, hook: &str) -> AppResult<Vec<String>> {
        self.dispatcher.implementations(hook)
    }

    /// Invokes `hook` across all enabled modules.
    pub fn dispatch(&self, hook: &str, payload: &mut HookPayload) -> AppResult<DispatchOutcome> {
        self.dispatcher.dispatch(hook, payload)
    }

    /// Clears the module list, enablement decisions, and hook maps.
    pub fn reset(&self) {
        self.discovery.reset();
        self.enablement.reset();
        self.hooks.reset();
        info!("Module registry reset");
    }
}
