//! Hook listing command.

use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use modhub_core::error::AppError;

/// One row of the hook table
#[derive(Debug, Serialize, Tabled)]
pub struct HookRow {
    /// Hook name
    #[tabled(rename = "Hook")]
    pub hook: String,
    /// Callable identifier
    #[tabled(rename = "Callable")]
    pub callable: String,
    /// Hook source file
    #[tabled(rename = "Source")]
    pub source: String,
}

/// List the hooks implemented by `module`
pub fn execute(module: &str, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let registry = super::build_registry(&config);

    if !registry.module_exists(module)? {
        return Err(AppError::not_found(format!("no module named '{module}'")));
    }

    let rows: Vec<HookRow> = registry
        .hooks_for(module)?
        .iter()
        .map(|(hook, implementation)| HookRow {
            hook: hook.clone(),
            callable: implementation.callable.clone(),
            source: implementation.source.display().to_string(),
        })
        .collect();

    if !registry.is_enabled(module)? {
        output::print_warning(&format!("Module '{module}' is not enabled"));
    }
    output::print_list(&rows, format);
    Ok(())
}
