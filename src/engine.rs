//! Generate pipeline
//!
//! Plans each rendered template against the tree and the manifest, then
//! writes atomically. User-modified files are never overwritten without
//! `--force`; per-file IO failures are collected so one bad path does not
//! abort the rest of the run.

use std::path::{Component, Path};

use crate::config::Config;
use crate::error::{DashgenError, DashgenResult};
use crate::manifest::{FileState, Manifest};
use crate::templates::{all_templates, get_template, OutputFile, Template};
use crate::writer::{atomic_write, hash_content};

/// Options for a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Overwrite files the user modified
    pub force: bool,
    /// Plan and report only, write nothing
    pub dry_run: bool,
    /// Template ids to generate (empty = all)
    pub templates: Vec<String>,
}

/// Result of a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Files written this run
    pub written: Vec<String>,
    /// Files skipped because they already match the template
    pub unchanged: Vec<String>,
    /// Files skipped because the user modified them
    pub skipped_modified: Vec<String>,
    /// Per-file errors
    pub errors: Vec<String>,
}

impl GenerateResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A rendered output together with its on-disk state
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub output: OutputFile,
    pub state: FileState,
    /// Read failure that prevented comparing the on-disk content
    pub error: Option<String>,
}

/// Resolve template ids to templates, failing before any write
///
/// An empty list selects all built-ins.
pub fn select_templates(ids: &[String]) -> DashgenResult<Vec<&'static Template>> {
    if ids.is_empty() {
        return Ok(all_templates());
    }
    ids.iter()
        .map(|id| {
            get_template(id).ok_or_else(|| DashgenError::UnknownTemplate { id: id.clone() })
        })
        .collect()
}

/// Check that an output path stays inside the frontend root
///
/// Protects against configs like `pages_dir = "../../etc"`.
pub fn validate_rel_path(path: &Path, root: &Path) -> DashgenResult<()> {
    if path.is_absolute() {
        return Err(DashgenError::PathEscape {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(DashgenError::PathEscape {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Classify each rendered output against the tree and the manifest
pub fn plan(
    root: &Path,
    outputs: &[OutputFile],
    manifest: &Manifest,
) -> DashgenResult<Vec<PlannedFile>> {
    let mut planned = Vec::with_capacity(outputs.len());
    for output in outputs {
        validate_rel_path(&output.path, root)?;
        let target = root.join(&output.path);
        // Compare bytes, not strings: a user edit that leaves invalid
        // UTF-8 behind is still just a modified file.
        let (state, error) = if !target.exists() {
            (FileState::Missing, None)
        } else {
            match std::fs::read(&target) {
                Ok(existing) if existing == output.content.as_bytes() => {
                    (FileState::Unchanged, None)
                }
                Ok(existing) => {
                    let on_disk_hash = hash_content(&existing);
                    (manifest.state_of(&output.path, &on_disk_hash), None)
                }
                Err(e) => (FileState::Modified, Some(e.to_string())),
            }
        };
        planned.push(PlannedFile {
            output: output.clone(),
            state,
            error,
        });
    }
    Ok(planned)
}

/// Render the selected templates and write them under the frontend root
pub fn generate(
    root: &Path,
    options: &GenerateOptions,
    config: &Config,
) -> DashgenResult<GenerateResult> {
    let templates = select_templates(&options.templates)?;
    let outputs: Vec<OutputFile> = templates
        .iter()
        .map(|t| t.render(&config.paths.pages_dir))
        .collect();

    let mut manifest = Manifest::load(root)?;
    let planned = plan(root, &outputs, &manifest)?;

    let mut result = GenerateResult::default();
    for item in &planned {
        let rel = item.output.path.display().to_string();
        let overwrite_modified = options.force || !config.generate.respect_manifest;

        // Unreadable files are reported and left alone; the rest of the
        // run proceeds.
        if let Some(message) = &item.error {
            result.errors.push(format!("{}: {}", rel, message));
            continue;
        }

        match item.state {
            FileState::Unchanged => {
                // Heal the manifest for files that match but were never
                // recorded (e.g. a deleted lock file).
                manifest.record(&item.output.path, hash_content(item.output.content.as_bytes()));
                result.unchanged.push(rel);
            }
            FileState::Modified if !overwrite_modified => {
                result.skipped_modified.push(rel);
            }
            FileState::Missing | FileState::Generated | FileState::Modified => {
                if options.dry_run {
                    result.written.push(rel);
                    continue;
                }
                let target = root.join(&item.output.path);
                match atomic_write(&target, &item.output.content) {
                    Ok(()) => {
                        manifest.record(
                            &item.output.path,
                            hash_content(item.output.content.as_bytes()),
                        );
                        result.written.push(rel);
                    }
                    Err(e) => result.errors.push(format!("{}: {}", rel, e)),
                }
            }
        }
    }

    if !options.dry_run {
        manifest.touch();
        manifest.save(root)?;
    }

    Ok(result)
}
