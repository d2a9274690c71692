//! Module listing and status commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use modhub_core::error::AppError;
use modhub_registry::ModuleInfo;

/// Arguments for `modules`
#[derive(Debug, Args)]
pub struct ModulesArgs {
    /// Only list enabled modules
    #[arg(long)]
    pub enabled: bool,
}

/// One row of the module table
#[derive(Debug, Serialize, Tabled)]
pub struct ModuleRow {
    /// Module name
    #[tabled(rename = "Module")]
    pub name: String,
    /// Enabled flag
    #[tabled(rename = "Enabled")]
    pub enabled: bool,
    /// Comma-separated hook names
    #[tabled(rename = "Hooks")]
    pub hooks: String,
    /// Enablement error, empty when the decision succeeded
    #[tabled(rename = "Error")]
    pub error: String,
}

impl From<ModuleInfo> for ModuleRow {
    fn from(info: ModuleInfo) -> Self {
        Self {
            name: info.name,
            enabled: info.enabled,
            hooks: info.hooks.join(", "),
            error: info.error.unwrap_or_default(),
        }
    }
}

/// List installed modules
pub fn list(args: &ModulesArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let registry = super::build_registry(&config);

    let rows: Vec<ModuleRow> = registry
        .modules_info()?
        .into_iter()
        .filter(|info| !args.enabled || info.enabled)
        .map(ModuleRow::from)
        .collect();

    output::print_list(&rows, format);
    Ok(())
}

/// Show one module's status
pub fn status(module: &str, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let registry = super::build_registry(&config);
    let info = registry.module_info(module)?;

    output::print_item(&info, format, |info| {
        println!("Module '{}'", info.name);
        output::print_kv("Enabled", if info.enabled { "yes" } else { "no" });
        output::print_kv(
            "Path",
            &config.modules.root.join(&info.name).display().to_string(),
        );
        if info.hooks.is_empty() {
            output::print_kv("Hooks", "(none)");
        } else {
            output::print_kv("Hooks", &info.hooks.join(", "));
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_joins_hooks() {
        let row = ModuleRow::from(ModuleInfo {
            name: "blog".into(),
            enabled: true,
            hooks: vec!["menu".into(), "routes".into()],
            error: None,
        });
        assert_eq!(row.hooks, "menu, routes");
        assert!(row.enabled);
        assert_eq!(row.error, "");
    }

    #[test]
    fn test_row_carries_enablement_error() {
        let row = ModuleRow::from(ModuleInfo {
            name: "blog".into(),
            enabled: false,
            hooks: Vec::new(),
            error: Some("invalid enable value for module 'blog'".into()),
        });
        assert!(!row.enabled);
        assert_eq!(row.error, "invalid enable value for module 'blog'");
    }
}
