// CLI module - command parsing and non-server commands

pub mod openapi;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app_data::AppData;

/// Items API server and tooling
#[derive(Parser, Debug)]
#[command(name = "itty-bitty-api")]
#[command(about = "Items CRUD API server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print or write the OpenAPI document generated from the route table
    Openapi {
        /// Output format
        #[arg(long, value_enum, default_value_t = SpecFormat::Json)]
        format: SpecFormat,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl Cli {
    /// Whether the parsed command starts the HTTP server
    pub fn is_serve(&self) -> bool {
        matches!(self.command, None | Some(Commands::Serve))
    }
}

/// Execute a non-server CLI command
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `app_data` - Application data the route table is built from
///
/// # Returns
/// * `Ok(())` - Command executed successfully (serve is a no-op here)
/// * `Err(...)` - Command execution failed
pub fn execute_command(cli: Cli, app_data: &AppData) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::Openapi { format, output }) => {
            openapi::export_spec(app_data, format, output.as_deref())?;
        }
        Some(Commands::Serve) | None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["itty-bitty-api"]);

        assert!(cli.is_serve());
    }

    #[test]
    fn test_parse_openapi_with_options() {
        let cli = Cli::parse_from([
            "itty-bitty-api",
            "openapi",
            "--format",
            "yaml",
            "--output",
            "spec.yaml",
        ]);

        assert!(!cli.is_serve());
        assert_eq!(
            cli.command,
            Some(Commands::Openapi {
                format: SpecFormat::Yaml,
                output: Some(PathBuf::from("spec.yaml")),
            })
        );
    }

    #[test]
    fn test_openapi_defaults_to_json_on_stdout() {
        let cli = Cli::parse_from(["itty-bitty-api", "openapi"]);

        assert_eq!(
            cli.command,
            Some(Commands::Openapi {
                format: SpecFormat::Json,
                output: None,
            })
        );
    }
}
