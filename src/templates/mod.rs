//! Built-in page templates
//!
//! Each submodule holds the literal source text of one generated dashboard
//! file. A [`Template`] ties that text to its id and default output path;
//! [`Template::render`] prefixes the generated-file banner so provenance is
//! visible in the frontend tree.

use std::path::{Path, PathBuf};

mod games;
mod mock_data;
mod settings;

/// Default directory for generated dashboard pages, relative to the
/// frontend root. Overridable via `[paths] pages_dir` in dashgen.toml.
pub const DEFAULT_PAGES_DIR: &str = "src/pages/dashboard";

/// A built-in page template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Stable identifier used on the CLI (`--template <id>`)
    pub id: &'static str,
    /// One-line description shown by `dashgen list`
    pub description: &'static str,
    /// Output file name within the pages directory
    pub file_name: &'static str,
    content: &'static str,
}

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the frontend root
    pub path: PathBuf,
    /// Full file content including the banner
    pub content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

const TEMPLATES: &[Template] = &[
    Template {
        id: "settings",
        description: "Dashboard settings page (notifications, app settings, privacy, invites)",
        file_name: "SettingsPage.tsx",
        content: settings::CONTENT,
    },
    Template {
        id: "games",
        description: "Games listing page with spotlight hero and game tiles",
        file_name: "GamesPage.tsx",
        content: games::CONTENT,
    },
    Template {
        id: "mock-data",
        description: "Mock dashboard API backing the pages when VITE_USE_MOCK is set",
        file_name: "mockData.ts",
        content: mock_data::CONTENT,
    },
];

/// All built-in templates in deterministic order
pub fn all_templates() -> Vec<&'static Template> {
    TEMPLATES.iter().collect()
}

/// Look up a template by id
pub fn get_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

impl Template {
    /// Output path relative to the frontend root, under the configured
    /// pages directory.
    pub fn rel_path(&self, pages_dir: &Path) -> PathBuf {
        pages_dir.join(self.file_name)
    }

    /// Render the template to its final file content
    ///
    /// Rendering is pure: the same content is produced on every run, so
    /// hash comparison against the manifest is meaningful.
    pub fn render(&self, pages_dir: &Path) -> OutputFile {
        let banner = format!(
            "// Generated by dashgen (template: {}). DO NOT EDIT.\n\
             // Regenerate with: dashgen generate --template {}\n\n",
            self.id, self.id
        );
        OutputFile::new(self.rel_path(pages_dir), format!("{}{}", banner, self.content))
    }
}
