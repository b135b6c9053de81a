//! Atomic file writer and content hashing
//!
//! Writes use the tempfile + rename pattern so a crash mid-write never
//! leaves a half-written page in the frontend tree. Hashes use the
//! `sha256:<hex>` format recorded in the manifest.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::DashgenResult;

/// Write content to a file atomically
///
/// Creates parent directories as needed. The temporary file is created in
/// the target directory so the final rename stays on one filesystem.
pub fn atomic_write(path: &Path, content: &str) -> DashgenResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Compute SHA-256 hash of content
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

/// Compute SHA-256 hash of a file's content
pub fn hash_file(path: &Path) -> DashgenResult<String> {
    let content = std::fs::read(path)?;
    Ok(hash_content(&content))
}
