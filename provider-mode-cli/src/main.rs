mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::handlers;
use provider_mode_core::models::LogLevel;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "provider-mode")]
#[command(version)]
#[command(about = "Resolve the build-tool provider mode (default, strict or lenient classpath)")]
#[command(
    help_template = "{name} - {version}\n{about}\n\n{usage-heading}\n  {usage}\n\n{all-args}{options}\n"
)]
struct Cli {
    /// Define a property as KEY=VALUE (repeatable)
    #[arg(short = 'D', long = "property", value_name = "KEY=VALUE", global = true)]
    properties: Vec<String>,

    /// Do not fall back to the process environment
    #[arg(long, global = true)]
    no_env: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved provider mode
    ///
    /// Prints one of: default, strict-classpath, lenient-classpath.
    ///
    /// JSON Response Format (with --json):
    ///   {"mode": "lenient-classpath", "classpath": true, "lenient": true,
    ///    "value": "lenient-classpath", "source": "property", "determined_at": "..."}
    Resolve {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Exit with status 0 in classpath mode (strict or lenient), 1 otherwise
    Classpath,

    /// Exit with status 0 in lenient classpath mode, 1 otherwise
    Lenient,

    /// Manage provider-mode settings
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = handlers::resolve_config_path(cli.config)?;
    let config = handlers::load_configuration(&config_path, cli.log_level)?;

    let _ = provider_mode_core::services::logging::init_logging(config.log_level);

    let use_environment = config.use_environment && !cli.no_env;

    match cli.command {
        Commands::Resolve { json } => {
            let store = handlers::build_store(&cli.properties, use_environment)?;
            handlers::handle_resolve(&store, json)
        }
        Commands::Classpath => {
            let store = handlers::build_store(&cli.properties, use_environment)?;
            Ok(handlers::exit_code(handlers::handle_classpath(&store)))
        }
        Commands::Lenient => {
            let store = handlers::build_store(&cli.properties, use_environment)?;
            Ok(handlers::exit_code(handlers::handle_lenient(&store)))
        }
        Commands::Config { init, force } => {
            if init {
                handlers::handle_config_init(&config_path, force)?;
            } else {
                println!("Config command requires --init flag");
                println!("Usage: provider-mode config --init [--force] [--config PATH]");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
