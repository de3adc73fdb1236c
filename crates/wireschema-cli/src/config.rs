//! Locating and reading the CLI's TOML configuration.
//!
//! An explicit `--config` path must exist. Otherwise the first existing file
//! among `wireschema/config.toml` and the platform config directory wins, and
//! with neither present the defaults apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use wireschema::{WireSchemaError, config::AppConfig};

const LOCAL_CONFIG: &str = "wireschema/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for WireSchemaError {
    fn from(err: ConfigError) -> Self {
        WireSchemaError::Config(err.to_string())
    }
}

/// Resolve and load the import configuration.
///
/// # Errors
///
/// Fails when an explicit path does not exist, or when the chosen file is
/// not valid TOML for [`AppConfig`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, WireSchemaError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path);
    }

    match implicit_candidates().into_iter().find(|path| path.exists()) {
        Some(path) => read_config(&path),
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit locations, most specific first.
fn implicit_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "wireschema", "wireschema") {
        Some(dirs) => candidates.push(dirs.config_dir().join("config.toml")),
        None => debug!("Platform config directory unavailable"),
    }
    candidates
}

fn read_config(path: &Path) -> Result<AppConfig, WireSchemaError> {
    info!(path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    debug!(config:?; "Configuration loaded");
    Ok(config)
}
