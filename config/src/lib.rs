//! Configuration loading and persistence for jackhouse.
//!
//! The config file lives at `~/.jackhouse/config.toml`:
//!
//! ```toml
//! [recital]
//! policy = "mostly_random"   # default | random | mostly_random
//! mode = "line"              # line | recital
//! line = 12                  # line number rendered when mode = "line"
//! seed = 42                  # fixes the random source
//! ```
//!
//! Policy tokens are validated while parsing: an unknown policy is a parse
//! error, not a silent fallback.

mod atomic_write;

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use jackhouse_types::{Policy, PolicyParseError};
use serde::Deserialize;
use thiserror::Error;

pub use atomic_write::atomic_write;

/// Environment variable that overrides the configured policy.
pub const POLICY_ENV_VAR: &str = "JACKHOUSE_POLICY";

#[derive(Debug, Default, Deserialize)]
pub struct HouseConfig {
    pub recital: Option<RecitalConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecitalConfig {
    pub policy: Option<Policy>,
    #[serde(default)]
    pub mode: RecitalMode,
    /// 1-based line rendered in [`RecitalMode::Line`]. Defaults to the full line.
    pub line: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecitalMode {
    #[default]
    Line,
    Recital,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to write config at {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Write { path, .. } => path,
        }
    }
}

impl HouseConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when there is no home directory or no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn policy(&self) -> Option<Policy> {
        self.recital.as_ref().and_then(|recital| recital.policy)
    }

    #[must_use]
    pub fn mode(&self) -> RecitalMode {
        self.recital
            .as_ref()
            .map(|recital| recital.mode)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.recital.as_ref().and_then(|recital| recital.line)
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.recital.as_ref().and_then(|recital| recital.seed)
    }

    /// Persist `policy` to the config file at `path`.
    ///
    /// Uses `toml_edit` so comments and other settings survive. Creates the
    /// file and its parent directory when missing.
    pub fn persist_policy(path: &Path, policy: Policy) -> Result<(), ConfigError> {
        let write_err = |source: io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = if path.exists() {
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            String::new()
        };

        let mut doc = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        if !doc.contains_key("recital") {
            doc["recital"] = toml_edit::Item::Table(toml_edit::Table::new());
        }
        doc["recital"]["policy"] = toml_edit::value(policy.as_str());

        atomic_write(path, doc.to_string().as_bytes()).map_err(write_err)?;
        tracing::info!(path = %path.display(), %policy, "Persisted policy");
        Ok(())
    }
}

/// Read the policy override from [`POLICY_ENV_VAR`].
///
/// Unset or blank means no override. A set but unknown value is an error.
pub fn policy_from_env() -> Result<Option<Policy>, PolicyParseError> {
    match env::var(POLICY_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Policy::parse(&value).map(Some),
        _ => Ok(None),
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".jackhouse").join("config.toml"))
}
