//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use modhub_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file and module enablement entries
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format, |config| {
                println!("{config:#?}");
            });
        }
        ConfigCommand::Validate => {
            let config = match super::load_config(config_path) {
                Ok(config) => config,
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {e}"));
                    return Err(e);
                }
            };

            let registry = super::build_registry(&config);
            let modules = registry.list_modules()?;

            // Surface malformed enable entries now instead of at first use.
            let mut invalid = 0;
            for module in &modules {
                if let Err(e) = registry.is_enabled(module) {
                    output::print_error(&e.to_string());
                    invalid += 1;
                }
            }
            if invalid > 0 {
                return Err(AppError::configuration(format!(
                    "{invalid} module enablement entr{} invalid",
                    if invalid == 1 { "y is" } else { "ies are" }
                )));
            }

            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            output::print_kv("Module root", &config.modules.root.display().to_string());
            output::print_kv("Installed modules", &modules.len().to_string());
            output::print_kv("Core modules", &config.modules.core.join(", "));
        }
    }

    Ok(())
}
