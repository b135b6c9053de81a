//! Error types for dashgen
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dashgen operations
pub type DashgenResult<T> = Result<T, DashgenError>;

/// Main error type for dashgen operations
#[derive(Error, Debug)]
pub enum DashgenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error (config or manifest)
    #[error("invalid TOML in {path}: {message}")]
    TomlParse { path: PathBuf, message: String },

    /// Manifest could not be serialized
    #[error("failed to serialize manifest: {message}")]
    TomlSerialize { message: String },

    /// Requested template does not exist
    #[error("unknown template '{id}' - run 'dashgen list' to see available templates")]
    UnknownTemplate { id: String },

    /// App entry file is missing for inject
    #[error("app entry file not found: {path}")]
    MissingEntry { path: PathBuf },

    /// Requested provider is neither built-in nor defined in config
    #[error("unknown provider '{name}' - built-ins are 'query' and 'theme'; others come from [[inject.custom]]")]
    UnknownProvider { name: String },

    /// Output path escapes the frontend root (security issue)
    #[error("path '{path}' escapes frontend root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Manifest was written by a newer dashgen
    #[error("manifest version {found} is newer than supported version {supported} - upgrade dashgen")]
    ManifestVersion { found: u32, supported: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_template() {
        let err = DashgenError::UnknownTemplate {
            id: "profile".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown template 'profile' - run 'dashgen list' to see available templates"
        );
    }

    #[test]
    fn test_error_display_missing_entry() {
        let err = DashgenError::MissingEntry {
            path: PathBuf::from("src/App.tsx"),
        };
        assert_eq!(err.to_string(), "app entry file not found: src/App.tsx");
    }

    #[test]
    fn test_error_display_toml_serialize() {
        let err = DashgenError::TomlSerialize {
            message: "unsupported type".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to serialize manifest: unsupported type"
        );
    }

    #[test]
    fn test_error_display_path_escape() {
        let err = DashgenError::PathEscape {
            path: PathBuf::from("../outside"),
            root: PathBuf::from("/project"),
        };
        assert!(err.to_string().contains("escapes frontend root"));
    }
}
