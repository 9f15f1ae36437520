//! On-disk settings for inkpress. The one thing a caller has to tell us
//! is where the corpus lives; everything downstream of that is handled
//! by `inkpress_engine`.
//!
//! The stored `corpus_path` may contain `~` or `$VARS`; expansion
//! happens when the path is resolved, not at load time, so the config
//! file round-trips byte-for-byte.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use inkpress_engine::io::{self, IoError};
use inkpress_engine::models::SourceFile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/inkpress";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config at {path} is not valid TOML: {source}")]
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("could not write config to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not expand corpus path {path}: {reason}")]
    Expand { path: PathBuf, reason: String },

    #[error("corpus at {path} is unusable: {source}")]
    BadCorpus { path: PathBuf, source: IoError },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub corpus_path: PathBuf,
}

impl Config {
    pub fn new(corpus_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
        }
    }

    /// Loads the config, or `None` when no config file exists yet.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::default_path())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    pub fn store(&self) -> Result<(), ConfigError> {
        self.store_to_path(Self::default_path())
    }

    pub fn store_to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        // Config is a flat table of plain values, so TOML encoding
        // cannot fail on it.
        let content = toml::to_string_pretty(self).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other(source),
        })?;
        std::fs::write(path, content).map_err(write_err)
    }

    pub fn default_path() -> PathBuf {
        let dir = shellexpand::tilde(CONFIG_DIR);
        PathBuf::from(dir.as_ref()).join(CONFIG_FILE)
    }

    /// Resolves `corpus_path` to a usable corpus directory: expands `~`
    /// and environment variables, then checks the directory exists.
    pub fn corpus_root(&self) -> Result<PathBuf, ConfigError> {
        let raw = self.corpus_path.to_string_lossy();
        let expanded = shellexpand::full(&raw).map_err(|e| ConfigError::Expand {
            path: self.corpus_path.clone(),
            reason: e.to_string(),
        })?;
        let root = PathBuf::from(expanded.as_ref());

        io::validate_corpus_dir(&root).map_err(|source| ConfigError::BadCorpus {
            path: root.clone(),
            source,
        })?;
        Ok(root)
    }

    /// Reads every content file under the configured corpus root.
    pub fn load_corpus(&self) -> Result<Vec<SourceFile>, ConfigError> {
        let root = self.corpus_root()?;
        io::load_corpus(&root).map_err(|source| ConfigError::BadCorpus { path: root, source })
    }
}
