//! Configuration module for dashgen
//!
//! Optional `dashgen.toml` at the frontend root. Every field has a
//! default so the tool works on a bare tree; unknown keys are ignored so
//! older binaries tolerate newer configs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DashgenError, DashgenResult};

/// Config file name at the frontend root
pub const CONFIG_FILE: &str = "dashgen.toml";

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// App entry file, target of provider injection
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Directory generated pages are written under
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            pages_dir: default_pages_dir(),
        }
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from("src/App.tsx")
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from(crate::templates::DEFAULT_PAGES_DIR)
}

/// Generate behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Skip files the user modified since the last generate
    #[serde(default = "default_true")]
    pub respect_manifest: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            respect_manifest: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A user-defined provider wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProvider {
    pub name: String,
    pub import_line: String,
    pub open_tag: String,
    pub close_tag: String,
    #[serde(default)]
    pub preamble: Option<String>,
}

/// Inject configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectConfig {
    /// Provider names applied by a bare `dashgen inject`
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Extra providers beyond the built-ins
    #[serde(default)]
    pub custom: Vec<CustomProvider>,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            custom: Vec::new(),
        }
    }
}

fn default_providers() -> Vec<String> {
    vec!["query".to_string(), "theme".to_string()]
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub inject: InjectConfig,
}

impl Config {
    /// Load config from the frontend root, falling back to defaults when
    /// `dashgen.toml` is absent. Malformed TOML is an error.
    pub fn load(root: &Path) -> DashgenResult<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| DashgenError::TomlParse {
            path,
            message: e.to_string(),
        })
    }
}
