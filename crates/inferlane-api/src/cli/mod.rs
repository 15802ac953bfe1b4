//! CLI command definitions for the `inferlane` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod config;
pub mod predict;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use inferlane_infra::config::DEFAULT_CONFIG_PATH;

/// Route inference requests to Bedrock, SageMaker or a local mock, with
/// latency and cost telemetry.
#[derive(Parser)]
#[command(name = "inferlane", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, global = true, env = "INFERLANE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans and metrics through OpenTelemetry (stdout exporters).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP inference server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Run a single prediction and print the result.
    Predict {
        /// Request as a JSON object, e.g. '{"prompt": "hello"}'.
        input: String,
    },

    /// Print the resolved configuration.
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["inferlane", "serve"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!cli.otel);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, 8080);
                assert_eq!(host, "0.0.0.0");
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "inferlane",
            "predict",
            r#"{"prompt":"hi"}"#,
            "--config",
            "configs/prod.yaml",
            "-vv",
            "--otel",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("configs/prod.yaml"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.otel);
        assert!(matches!(cli.command, Commands::Predict { .. }));
    }
}
