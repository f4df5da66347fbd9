//! CC-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, CcError>;

/// Top-level error type for CareerCraft.
///
/// The functional core is total: blank input, unknown lookup keys, and
/// missing or corrupt favorites data all map to defined results, never to a
/// variant here. These variants cover genuine environment failures only.
#[derive(Debug, Error)]
pub enum CcError {
    #[error("[CC-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[CC-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[CC-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[CC-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[CC-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CcError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "CC-1001",
            Self::MissingConfig { .. } => "CC-1002",
            Self::ConfigParse { .. } => "CC-1003",
            Self::Serialization { .. } => "CC-2101",
            Self::Io { .. } => "CC-3002",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for CcError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for CcError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<CcError> {
        vec![
            CcError::InvalidConfig {
                details: String::new(),
            },
            CcError::MissingConfig {
                path: PathBuf::new(),
            },
            CcError::ConfigParse {
                context: "",
                details: String::new(),
            },
            CcError::Serialization {
                context: "",
                details: String::new(),
            },
            CcError::Io {
                path: PathBuf::new(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "test"),
            },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let errors = all_variants();
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_cc_prefix() {
        for err in &all_variants() {
            assert!(
                err.code().starts_with("CC-"),
                "code {} must start with CC-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = CcError::InvalidConfig {
            details: "bad value".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("CC-1001"),
            "display should contain error code: {msg}"
        );
        assert!(
            msg.contains("bad value"),
            "display should contain details: {msg}"
        );
    }

    #[test]
    fn io_convenience_constructor() {
        let err = CcError::io(
            "/tmp/resume.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "CC-3002");
        assert!(err.to_string().contains("/tmp/resume.txt"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CcError = json_err.into();
        assert_eq!(err.code(), "CC-2101");
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: CcError = toml_err.into();
        assert_eq!(err.code(), "CC-1003");
    }
}
