//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{CcError, Result};

/// Full CareerCraft configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
}

/// Filesystem paths used by ccraft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    /// Persisted interview favorites (JSON array of question strings).
    pub favorites_file: PathBuf,
    /// Append-only activity log.
    pub jsonl_log: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!(
                    "[CC-CONFIG] WARNING: HOME not set, falling back to /tmp for data paths"
                );
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        let cfg = home_dir.join(".config").join("ccraft").join("config.toml");
        let data = home_dir.join(".local").join("share").join("ccraft");
        Self {
            config_file: cfg,
            favorites_file: data.join("favorites.json"),
            jsonl_log: data.join("activity.jsonl"),
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path;
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| CcError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(CcError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        set_env_path("CCRAFT_FAVORITES_FILE", &mut self.paths.favorites_file);
        set_env_path("CCRAFT_JSONL_LOG", &mut self.paths.jsonl_log);
    }

    fn validate(&self) -> Result<()> {
        if self.paths.favorites_file.as_os_str().is_empty() {
            return Err(CcError::InvalidConfig {
                details: "paths.favorites_file must not be empty".to_string(),
            });
        }
        if self.paths.jsonl_log.as_os_str().is_empty() {
            return Err(CcError::InvalidConfig {
                details: "paths.jsonl_log must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn set_env_path(name: &str, target: &mut PathBuf) {
    if let Some(raw) = env::var(name).ok().filter(|raw| !raw.trim().is_empty()) {
        *target = PathBuf::from(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_under_data_dir() {
        let cfg = Config::default();
        assert!(cfg.paths.favorites_file.ends_with("favorites.json"));
        assert!(cfg.paths.jsonl_log.ends_with("activity.jsonl"));
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code(), "CC-1002");
    }

    #[test]
    fn loads_partial_toml_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[paths]\nfavorites_file = \"/tmp/ccraft-test/favs.json\"\n",
        )
        .expect("write config");
        let cfg = Config::load(Some(&path)).expect("load should succeed");
        assert_eq!(
            cfg.paths.favorites_file,
            PathBuf::from("/tmp/ccraft-test/favs.json")
        );
        // Unspecified fields fall back to defaults.
        assert!(cfg.paths.jsonl_log.ends_with("activity.jsonl"));
        assert_eq!(cfg.paths.config_file, path);
    }

    #[test]
    fn invalid_toml_reports_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "= invalid").expect("write config");
        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code(), "CC-1003");
    }
}
