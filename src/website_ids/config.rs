//! # Config Resolution
//!
//! Configuration comes from the first present source, in this order:
//!
//! 1. `CONFIG_JSON`: a full configuration object.
//! 2. `WEBSITES`: only the website list, wrapped as `{ "websites": [...] }`.
//! 3. `<install root>/configs/nginxpulse_config.json`, where the install root is
//!    the directory above the one holding the executable.
//!
//! An environment input that is unset or empty is not present. Once a source is
//! present it is the one used: if it cannot be read or parsed, resolution fails
//! rather than moving on to the next source.
//!
//! [`ConfigSources`] captures the three inputs as plain values so that
//! [`resolve`] itself never touches the process environment.

use crate::error::ConfigLoadError;
use crate::model::{Configuration, WebsiteEntry};
use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_JSON_VAR: &str = "CONFIG_JSON";
pub const WEBSITES_VAR: &str = "WEBSITES";
pub const FALLBACK_RELATIVE_PATH: &str = "configs/nginxpulse_config.json";

/// The inputs the resolver chooses between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub config_json: Option<String>,
    pub websites: Option<String>,
    pub fallback_path: Option<PathBuf>,
}

impl ConfigSources {
    /// Capture sources from the running process.
    ///
    /// The install root is only looked up when neither environment input is present.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let config_json = env_input(CONFIG_JSON_VAR)?;
        let websites = env_input(WEBSITES_VAR)?;
        let fallback_path = if config_json.is_none() && websites.is_none() {
            Some(fallback_path(&install_root()?))
        } else {
            None
        };
        Ok(Self {
            config_json,
            websites,
            fallback_path,
        })
    }
}

/// Which source a configuration was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    ConfigJson,
    Websites,
    File(PathBuf),
}

/// A set but non-UTF-8 value is present, so it is an error rather than absent.
fn env_input(key: &str) -> Result<Option<String>, ConfigLoadError> {
    match std::env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigLoadError::NotUnicode {
            origin: key.to_string(),
        }),
    }
}

/// Directory above the one holding the running executable.
pub fn install_root() -> Result<PathBuf, ConfigLoadError> {
    let exe = std::env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(ConfigLoadError::ExecutableLocation)?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            ConfigLoadError::ExecutableLocation(std::io::Error::other(format!(
                "{} has no parent directory",
                exe.display()
            )))
        })
}

pub fn fallback_path(install_root: &Path) -> PathBuf {
    install_root.join(FALLBACK_RELATIVE_PATH)
}

/// Resolve configuration from the first present source.
pub fn resolve(sources: &ConfigSources) -> Result<Configuration, ConfigLoadError> {
    resolve_with_origin(sources).map(|(config, _)| config)
}

pub fn resolve_with_origin(
    sources: &ConfigSources,
) -> Result<(Configuration, ConfigOrigin), ConfigLoadError> {
    if let Some(raw) = &sources.config_json {
        debug!(source = CONFIG_JSON_VAR, "using full configuration from environment");
        let config = parse_json(raw, CONFIG_JSON_VAR)?;
        return Ok((config, ConfigOrigin::ConfigJson));
    }

    if let Some(raw) = &sources.websites {
        debug!(source = WEBSITES_VAR, "using website list from environment");
        let websites: Vec<WebsiteEntry> = parse_json(raw, WEBSITES_VAR)?;
        return Ok((Configuration::from_websites(websites), ConfigOrigin::Websites));
    }

    let path = sources.fallback_path.as_deref().ok_or_else(|| {
        ConfigLoadError::Io {
            path: PathBuf::from(FALLBACK_RELATIVE_PATH),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no configuration source available",
            ),
        }
    })?;
    debug!(path = %path.display(), "using fallback configuration file");
    let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_json(&content, &path.display().to_string())?;
    Ok((config, ConfigOrigin::File(path.to_path_buf())))
}

fn parse_json<T: serde::de::DeserializeOwned>(
    raw: &str,
    origin: &str,
) -> Result<T, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
        origin: origin.to_string(),
        source,
    })
}
