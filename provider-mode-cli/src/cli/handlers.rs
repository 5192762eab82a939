//! CLI command handlers

use super::store::HostStore;
use anyhow::{Context, Result};
use provider_mode_core::models::{Configuration, LogLevel};
use provider_mode_core::{ModeReport, ModeResolver, PropertyMap, PROVIDER_MODE_PROPERTY_NAME};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Resolve the configuration file path, expanding a leading `~/`
pub fn resolve_config_path(config_file: Option<PathBuf>) -> Result<PathBuf> {
    let Some(path) = config_file else {
        return Configuration::default_config_path()
            .context("Failed to get default config path");
    };

    match path.to_str().and_then(|p| p.strip_prefix("~/")) {
        Some(rest) => {
            let home = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
            Ok(home.join(rest))
        }
        None => Ok(path),
    }
}

/// Load the configuration, letting `--log-level` override the file
pub fn load_configuration(path: &Path, log_level: Option<LogLevel>) -> Result<Configuration> {
    let mut config = Configuration::load_from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if let Some(level) = log_level {
        config.log_level = level;
    }
    Ok(config)
}

/// Build the host store from `-D` definitions
pub fn build_store(definitions: &[String], use_environment: bool) -> Result<HostStore> {
    let properties =
        PropertyMap::from_definitions(definitions).context("Invalid property definition")?;
    tracing::debug!(
        properties = properties.len(),
        use_environment = use_environment,
        "Property store ready"
    );
    Ok(HostStore::new(properties, use_environment))
}

/// Handle the 'resolve' command
pub fn handle_resolve(store: &HostStore, json: bool) -> Result<ExitCode> {
    if json {
        let (value, source) = store.lookup_with_source(PROVIDER_MODE_PROPERTY_NAME);
        let report = ModeReport::new(value, source);
        let output = report.to_json().context("Failed to serialize mode report")?;
        println!("{}", output);
    } else {
        println!("{}", ModeResolver::new(store).mode());
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the 'classpath' command
pub fn handle_classpath(store: &HostStore) -> bool {
    ModeResolver::new(store).is_classpath_mode()
}

/// Handle the 'lenient' command
pub fn handle_lenient(store: &HostStore) -> bool {
    ModeResolver::new(store).is_lenient_mode()
}

/// Exit status for a predicate command
pub fn exit_code(holds: bool) -> ExitCode {
    if holds {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Handle 'config --init'
pub fn handle_config_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file {} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Configuration::default()
        .save_to_file(config_path)
        .context("Failed to write configuration")?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
