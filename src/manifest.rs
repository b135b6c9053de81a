//! Generation manifest
//!
//! `.dashgen.lock` at the frontend root records the hash of every file the
//! last generate wrote. On the next run the hash tells apart files dashgen
//! owns (safe to overwrite) from files the user edited (skip unless
//! forced).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DashgenError, DashgenResult};
use crate::writer::atomic_write;

/// Manifest file name at the frontend root
pub const MANIFEST_FILE: &str = ".dashgen.lock";

/// Current manifest format version
pub const MANIFEST_VERSION: u32 = 1;

/// How an output file on disk relates to the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// File does not exist yet
    Missing,
    /// On-disk content equals the rendered template
    Unchanged,
    /// On-disk hash matches the manifest but the template has moved on
    Generated,
    /// On-disk content differs from what dashgen last wrote
    Modified,
}

/// Tracks hashes of generated files
///
/// Paths are stored slash-separated for portability across platforms.
/// `BTreeMap` keeps serialization deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    /// RFC 3339 timestamp of the last non-dry-run generate
    pub generated_at: String,
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            generated_at: String::new(),
            files: BTreeMap::new(),
        }
    }
}

impl Manifest {
    /// Load the manifest from the frontend root
    ///
    /// A missing file yields the default (empty) manifest; a malformed one
    /// is an error so drift detection never runs on garbage.
    pub fn load(root: &Path) -> DashgenResult<Self> {
        let path = root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let manifest: Manifest =
            toml::from_str(&raw).map_err(|e| DashgenError::TomlParse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        if manifest.version > MANIFEST_VERSION {
            return Err(DashgenError::ManifestVersion {
                found: manifest.version,
                supported: MANIFEST_VERSION,
            });
        }
        Ok(manifest)
    }

    /// Write the manifest atomically to the frontend root
    pub fn save(&self, root: &Path) -> DashgenResult<()> {
        let path = root.join(MANIFEST_FILE);
        let raw = toml::to_string_pretty(self).map_err(|e| DashgenError::TomlSerialize {
            message: e.to_string(),
        })?;
        atomic_write(&path, &raw)
    }

    /// Record a generated file
    pub fn record(&mut self, rel_path: &Path, hash: impl Into<String>) {
        self.files.insert(manifest_key(rel_path), hash.into());
    }

    /// Recorded hash for a path, if any
    pub fn hash_of(&self, rel_path: &Path) -> Option<&str> {
        self.files.get(&manifest_key(rel_path)).map(String::as_str)
    }

    /// Classify a file that exists on disk but differs from the template
    pub fn state_of(&self, rel_path: &Path, on_disk_hash: &str) -> FileState {
        match self.hash_of(rel_path) {
            Some(recorded) if recorded == on_disk_hash => FileState::Generated,
            _ => FileState::Modified,
        }
    }

    /// Stamp the manifest with the current time
    pub fn touch(&mut self) {
        self.generated_at = chrono::Utc::now().to_rfc3339();
    }
}

/// Slash-separated manifest key for a relative path
fn manifest_key(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
