//! Locating and reading the `config.toml` used by the command line tool.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use scrawl::{ScrawlError, config::AppConfig};

/// Problems with a configuration file the CLI was pointed at.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Config file not found: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ScrawlError {
    fn from(err: ConfigError) -> Self {
        ScrawlError::Config(err.to_string())
    }
}

/// Resolves the configuration for this run.
///
/// An explicit path must exist. Without one, `scrawl/config.toml` under the
/// working directory is tried, then `config.toml` in the per-user config
/// directory. If neither is present the defaults are used.
///
/// # Errors
///
/// Fails if the explicit file is missing or if the selected file is not
/// valid TOML for [`AppConfig`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ScrawlError> {
    if let Some(path) = explicit_path {
        return read_config(path.as_ref());
    }

    match discovered_config() {
        Some(path) => read_config(&path),
        None => {
            debug!("No config file discovered, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// First existing config file among the implicit locations.
fn discovered_config() -> Option<PathBuf> {
    let user_dir = ProjectDirs::from("com", "scrawl", "scrawl")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if user_dir.is_none() {
        debug!("No per-user config directory on this platform");
    }

    [Some(PathBuf::from("scrawl/config.toml")), user_dir]
        .into_iter()
        .flatten()
        .find(|candidate| {
            let found = candidate.is_file();
            debug!(path:? = candidate, found; "Checked config location");
            found
        })
}

fn read_config(path: &Path) -> Result<AppConfig, ScrawlError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }
    info!(path:? = path; "Reading config file");

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        }
        .into()
    })
}
