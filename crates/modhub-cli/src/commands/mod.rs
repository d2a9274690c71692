//! CLI command definitions and dispatch.

pub mod config;
pub mod hooks;
pub mod modules;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use modhub_core::config::AppConfig;
use modhub_core::error::AppError;
use modhub_registry::{CallableTable, ComponentCatalog, ModuleRegistry};

/// ModHub — module registry administration
#[derive(Debug, Parser)]
#[command(name = "modhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List installed modules
    Modules(modules::ModulesArgs),
    /// Show the status of one module
    Status {
        /// Module name
        module: String,
    },
    /// List the hooks a module implements
    Hooks {
        /// Module name
        module: String,
    },
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Modules(args) => modules::list(args, &self.config, self.format),
            Commands::Status { module } => modules::status(module, &self.config, self.format),
            Commands::Hooks { module } => hooks::execute(module, &self.config, self.format),
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    tracing::debug!(path = %config_path, "Loading configuration");
    AppConfig::load_file(config_path)
}

/// Helper: build a registry over the configured module root
///
/// The CLI only inspects modules, so the component catalog and callable
/// table start empty.
pub fn build_registry(config: &AppConfig) -> ModuleRegistry {
    ModuleRegistry::from_config(
        &config.modules,
        Arc::new(ComponentCatalog::new()),
        Arc::new(CallableTable::new()),
    )
}
