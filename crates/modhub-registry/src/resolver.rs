//! Identifier resolver — turns `module:name` or bare identifiers into
//! capability-checked component names.
//!
//! Checks run in a fixed order so that the most specific failure is
//! reported: module existence, module enablement, component existence,
//! and only then capability conformance.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use modhub_core::error::AppError;
use modhub_core::result::AppResult;
use modhub_core::traits::{Capability, ComponentSpace, EnablementSource};

use crate::discovery::ModuleDiscovery;
use crate::enablement::EnablementResolver;

/// Separator between a module name and a local name in identifiers.
pub const IDENTIFIER_SEPARATOR: char = ':';

/// Separator between segments of a fully qualified component name.
pub const PATH_SEPARATOR: &str = "::";

/// Outcome of resolving an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum ResolvedIdentifier {
    /// A bare identifier naming a global component.
    Global {
        /// The component name, unchanged.
        name: String,
    },
    /// A `module:name` identifier expanded to a fully qualified name.
    Qualified {
        /// Owning module.
        module: String,
        /// Kind segment; empty when none was requested.
        kind: String,
        /// Local name as written after the first `:`.
        local: String,
        /// The composed fully qualified name.
        qualified: String,
    },
}

impl ResolvedIdentifier {
    /// Returns the fully qualified component name.
    pub fn qualified_name(&self) -> &str {
        match self {
            Self::Global { name } => name,
            Self::Qualified { qualified, .. } => qualified,
        }
    }

    /// Returns the owning module, if the identifier was qualified.
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::Global { .. } => None,
            Self::Qualified { module, .. } => Some(module),
        }
    }
}

impl fmt::Display for ResolvedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified_name())
    }
}

/// Composes the fully qualified name of `local` in `module`.
///
/// An empty `kind` adds no intermediate segment.
pub fn qualify(module: &str, kind: &str, local: &str) -> String {
    if kind.is_empty() {
        format!("{module}{PATH_SEPARATOR}{local}")
    } else {
        format!("{module}{PATH_SEPARATOR}{kind}{PATH_SEPARATOR}{local}")
    }
}

/// Resolves identifiers against discovered, enabled modules.
#[derive(Debug)]
pub struct IdentifierResolver {
    discovery: Arc<ModuleDiscovery>,
    enablement: Arc<EnablementResolver>,
    source: Arc<dyn EnablementSource>,
    space: Arc<dyn ComponentSpace>,
}

impl IdentifierResolver {
    /// Creates a resolver.
    pub fn new(
        discovery: Arc<ModuleDiscovery>,
        enablement: Arc<EnablementResolver>,
        source: Arc<dyn EnablementSource>,
        space: Arc<dyn ComponentSpace>,
    ) -> Self {
        Self {
            discovery,
            enablement,
            source,
            space,
        }
    }

    /// Resolves `identifier` (`name` or `module:name`) of the given kind.
    ///
    /// Only the first `:` splits; the local name may contain more. An
    /// identifier containing `::` is taken as an already qualified name.
    pub fn resolve(
        &self,
        identifier: &str,
        kind: &str,
        capability: Option<&Capability>,
    ) -> AppResult<ResolvedIdentifier> {
        let resolved = if let Some((module, rest)) = identifier.split_once(PATH_SEPARATOR) {
            self.resolve_path(identifier, module, kind, rest)?
        } else {
            match identifier.split_once(IDENTIFIER_SEPARATOR) {
                None => self.resolve_global(identifier)?,
                Some((module, local)) => self.resolve_qualified(identifier, module, kind, local)?,
            }
        };

        if let Some(capability) = capability {
            let name = resolved.qualified_name();
            if !self.space.satisfies(name, capability) {
                return Err(AppError::capability_mismatch(format!(
                    "component '{name}' does not implement '{capability}'"
                )));
            }
        }

        debug!(identifier = %identifier, resolved = %resolved, "Identifier resolved");
        Ok(resolved)
    }

    fn resolve_global(&self, name: &str) -> AppResult<ResolvedIdentifier> {
        if !self.space.exists(name) {
            return Err(AppError::not_found(format!("no component named '{name}'")));
        }
        Ok(ResolvedIdentifier::Global {
            name: name.to_string(),
        })
    }

    fn resolve_qualified(
        &self,
        identifier: &str,
        module: &str,
        kind: &str,
        local: &str,
    ) -> AppResult<ResolvedIdentifier> {
        self.check_module(module)?;

        let qualified = qualify(module, kind, local);
        if !self.space.exists(&qualified) {
            return Err(AppError::not_found(format!(
                "identifier '{identifier}' resolved to '{qualified}', which does not exist"
            )));
        }

        Ok(ResolvedIdentifier::Qualified {
            module: module.to_string(),
            kind: kind.to_string(),
            local: local.to_string(),
            qualified,
        })
    }

    /// Resolves a name already in `module::kind::local` or `module::local`
    /// form. The kind segment is only recognised when it equals `kind`.
    fn resolve_path(
        &self,
        identifier: &str,
        module: &str,
        kind: &str,
        rest: &str,
    ) -> AppResult<ResolvedIdentifier> {
        self.check_module(module)?;

        if !self.space.exists(identifier) {
            return Err(AppError::not_found(format!("no component named '{identifier}'")));
        }

        let kinded = rest
            .strip_prefix(kind)
            .and_then(|r| r.strip_prefix(PATH_SEPARATOR));
        let (kind, local) = match kinded {
            Some(local) if !kind.is_empty() => (kind, local),
            _ => ("", rest),
        };

        Ok(ResolvedIdentifier::Qualified {
            module: module.to_string(),
            kind: kind.to_string(),
            local: local.to_string(),
            qualified: identifier.to_string(),
        })
    }

    fn check_module(&self, module: &str) -> AppResult<()> {
        if !self.discovery.contains(module)? {
            return Err(AppError::not_found(format!("no module named '{module}'")));
        }

        if !self.enablement.is_enabled_from(module, self.source.as_ref())? {
            return Err(AppError::module_disabled(format!(
                "module '{module}' is not enabled"
            )));
        }
        Ok(())
    }
}
