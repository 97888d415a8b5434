use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required setting `{0}` (pass --{0} or set it in the config file)")]
    MissingSetting(&'static str),
}

/// Optional TOML run file. Command-line values win over these.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub json_file_location: Option<PathBuf>,
    pub csv_file_name: Option<PathBuf>,
    pub export_location: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
    pub verify_export: Option<bool>,
}

pub fn load_run_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    parse_run_config(&text)
}

pub fn parse_run_config(text: &str) -> Result<RunConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/config.rs"]
mod tests;
