//! Provider wrapper injection
//!
//! Patches the app entry file so extra React providers wrap the existing
//! `<AuthProvider>` composition. The operation is guarded and idempotent:
//! a missing anchor is a no-op, an already-present provider is skipped,
//! and running inject twice leaves the file unchanged.

use std::path::Path;

use crate::config::{Config, CustomProvider};
use crate::error::{DashgenError, DashgenResult};
use crate::writer::atomic_write;

/// Anchor the providers wrap around
const ANCHOR_OPEN: &str = "<AuthProvider>";
const ANCHOR_CLOSE: &str = "</AuthProvider>";

/// A provider wrapper to splice into the entry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub name: String,
    pub import_line: String,
    /// Statements needed before the component (e.g. client construction)
    pub preamble: Option<String>,
    pub open_tag: String,
    pub close_tag: String,
}

/// Per-provider outcome of an inject run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Wrapper spliced in
    Injected,
    /// Open tag already present, nothing to do
    AlreadyPresent,
    /// Anchor not found in the entry file, guarded no-op
    AnchorMissing,
}

impl InjectOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            InjectOutcome::Injected => "injected",
            InjectOutcome::AlreadyPresent => "already-present",
            InjectOutcome::AnchorMissing => "anchor-missing",
        }
    }
}

fn builtin_providers() -> Vec<Provider> {
    vec![
        Provider {
            name: "query".to_string(),
            import_line:
                "import { QueryClient, QueryClientProvider } from '@tanstack/react-query';"
                    .to_string(),
            preamble: Some("const queryClient = new QueryClient();".to_string()),
            open_tag: "<QueryClientProvider client={queryClient}>".to_string(),
            close_tag: "</QueryClientProvider>".to_string(),
        },
        Provider {
            name: "theme".to_string(),
            import_line: "import { ThemeProvider } from '@context/ThemeContext';".to_string(),
            preamble: None,
            open_tag: "<ThemeProvider>".to_string(),
            close_tag: "</ThemeProvider>".to_string(),
        },
    ]
}

impl From<&CustomProvider> for Provider {
    fn from(c: &CustomProvider) -> Self {
        Self {
            name: c.name.clone(),
            import_line: c.import_line.clone(),
            preamble: c.preamble.clone(),
            open_tag: c.open_tag.clone(),
            close_tag: c.close_tag.clone(),
        }
    }
}

/// Resolve provider names against built-ins and `[[inject.custom]]`
///
/// An empty list selects the config's `inject.providers`. Built-ins can be
/// shadowed by a custom provider of the same name.
pub fn resolve_providers(names: &[String], config: &Config) -> DashgenResult<Vec<Provider>> {
    let names = if names.is_empty() {
        &config.inject.providers
    } else {
        names
    };

    names
        .iter()
        .map(|name| {
            if let Some(custom) = config.inject.custom.iter().find(|c| &c.name == name) {
                return Ok(Provider::from(custom));
            }
            builtin_providers()
                .into_iter()
                .find(|p| &p.name == name)
                .ok_or_else(|| DashgenError::UnknownProvider { name: name.clone() })
        })
        .collect()
}

/// Significant prefix of the open tag used for presence detection
///
/// `<QueryClientProvider client={queryClient}>` is detected via
/// `<QueryClientProvider` so hand-written attribute variations still count
/// as present.
fn detection_token(open_tag: &str) -> &str {
    match open_tag.find(|c: char| c.is_whitespace() || c == '>') {
        Some(idx) => &open_tag[..idx],
        None => open_tag,
    }
}

/// Inject providers into the entry file under the frontend root
///
/// Returns one outcome per requested provider. The entry is rewritten
/// atomically, once, only when at least one provider was injected and
/// `dry_run` is false.
pub fn inject_providers(
    root: &Path,
    config: &Config,
    names: &[String],
    dry_run: bool,
) -> DashgenResult<Vec<(String, InjectOutcome)>> {
    let providers = resolve_providers(names, config)?;
    let entry = root.join(&config.paths.entry);
    if !entry.exists() {
        return Err(DashgenError::MissingEntry { path: entry });
    }

    let mut content = std::fs::read_to_string(&entry)?;
    let mut outcomes = Vec::with_capacity(providers.len());
    let mut dirty = false;

    for provider in &providers {
        let outcome = apply_provider(&mut content, provider);
        if outcome == InjectOutcome::Injected {
            dirty = true;
        }
        outcomes.push((provider.name.clone(), outcome));
    }

    if dirty && !dry_run {
        atomic_write(&entry, &content)?;
    }

    Ok(outcomes)
}

fn apply_provider(content: &mut String, provider: &Provider) -> InjectOutcome {
    if content.contains(detection_token(&provider.open_tag)) {
        return InjectOutcome::AlreadyPresent;
    }

    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let trailing_newline = content.ends_with('\n');

    let open_idx = lines.iter().position(|l| l.contains(ANCHOR_OPEN));
    let close_idx = lines.iter().rposition(|l| l.contains(ANCHOR_CLOSE));
    let (open_idx, close_idx) = match (open_idx, close_idx) {
        (Some(o), Some(c)) if o <= c => (o, c),
        _ => return InjectOutcome::AnchorMissing,
    };

    let indent: String = lines[open_idx]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();

    // Wrap: push the anchor block one level deeper, then surround it.
    for line in &mut lines[open_idx..=close_idx] {
        if !line.trim().is_empty() {
            line.insert_str(0, "  ");
        }
    }
    lines.insert(close_idx + 1, format!("{}{}", indent, provider.close_tag));
    lines.insert(open_idx, format!("{}{}", indent, provider.open_tag));

    // Imports go after the last existing import; the preamble follows the
    // import block separated by a blank line.
    let import_idx = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("import "));
    let insert_at = match import_idx {
        Some(idx) => idx + 1,
        None => 0,
    };
    lines.insert(insert_at, provider.import_line.clone());
    if let Some(preamble) = &provider.preamble {
        lines.insert(insert_at + 1, String::new());
        lines.insert(insert_at + 2, preamble.clone());
    }

    *content = lines.join("\n");
    if trailing_newline {
        content.push('\n');
    }
    InjectOutcome::Injected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ENTRY: &str = "import React from 'react'\n\
                         import { AuthProvider } from './auth/AuthContext'\n\
                         \n\
                         export default function App() {\n\
                         \x20\x20return (\n\
                         \x20\x20\x20\x20<AuthProvider>\n\
                         \x20\x20\x20\x20\x20\x20<AppContent />\n\
                         \x20\x20\x20\x20</AuthProvider>\n\
                         \x20\x20)\n\
                         }\n";

    fn setup(entry_content: &str) -> (tempfile::TempDir, Config) {
        let dir = tempdir().unwrap();
        let config = Config::default();
        let entry = dir.path().join(&config.paths.entry);
        fs::create_dir_all(entry.parent().unwrap()).unwrap();
        fs::write(&entry, entry_content).unwrap();
        (dir, config)
    }

    fn read_entry(dir: &tempfile::TempDir, config: &Config) -> String {
        fs::read_to_string(dir.path().join(&config.paths.entry)).unwrap()
    }

    #[test]
    fn inject_wraps_anchor_and_adds_import() {
        let (dir, config) = setup(ENTRY);

        let outcomes =
            inject_providers(dir.path(), &config, &["theme".to_string()], false).unwrap();
        assert_eq!(outcomes, vec![("theme".to_string(), InjectOutcome::Injected)]);

        let content = read_entry(&dir, &config);
        assert!(content.contains("import { ThemeProvider } from '@context/ThemeContext';"));
        let theme_open = content.find("<ThemeProvider>").unwrap();
        let auth_open = content.find("<AuthProvider>").unwrap();
        let auth_close = content.find("</AuthProvider>").unwrap();
        let theme_close = content.find("</ThemeProvider>").unwrap();
        assert!(theme_open < auth_open);
        assert!(auth_close < theme_close);
    }

    #[test]
    fn inject_query_adds_preamble() {
        let (dir, config) = setup(ENTRY);

        inject_providers(dir.path(), &config, &["query".to_string()], false).unwrap();

        let content = read_entry(&dir, &config);
        assert!(content.contains("const queryClient = new QueryClient();"));
        assert!(content.contains("<QueryClientProvider client={queryClient}>"));
        // Preamble lands after the import block
        let import_pos = content.find("@tanstack/react-query").unwrap();
        let preamble_pos = content.find("const queryClient").unwrap();
        assert!(import_pos < preamble_pos);
    }

    #[test]
    fn inject_is_idempotent() {
        let (dir, config) = setup(ENTRY);

        inject_providers(dir.path(), &config, &[], false).unwrap();
        let first = read_entry(&dir, &config);

        let outcomes = inject_providers(dir.path(), &config, &[], false).unwrap();
        let second = read_entry(&dir, &config);

        assert_eq!(first, second);
        assert!(outcomes
            .iter()
            .all(|(_, o)| *o == InjectOutcome::AlreadyPresent));
    }

    #[test]
    fn default_providers_nest_query_outside_theme() {
        let (dir, config) = setup(ENTRY);

        inject_providers(dir.path(), &config, &[], false).unwrap();

        let content = read_entry(&dir, &config);
        let query = content.find("<QueryClientProvider").unwrap();
        let theme = content.find("<ThemeProvider>").unwrap();
        let auth = content.find("<AuthProvider>").unwrap();
        assert!(query < theme && theme < auth);
    }

    #[test]
    fn missing_anchor_is_a_guarded_no_op() {
        let (dir, config) = setup("import React from 'react'\n\nexport default () => null\n");

        let outcomes =
            inject_providers(dir.path(), &config, &["theme".to_string()], false).unwrap();
        assert_eq!(
            outcomes,
            vec![("theme".to_string(), InjectOutcome::AnchorMissing)]
        );
        assert_eq!(
            read_entry(&dir, &config),
            "import React from 'react'\n\nexport default () => null\n"
        );
    }

    #[test]
    fn missing_entry_is_an_error() {
        let dir = tempdir().unwrap();
        let config = Config::default();

        let err = inject_providers(dir.path(), &config, &[], false).unwrap_err();
        assert!(matches!(err, DashgenError::MissingEntry { .. }));
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let (dir, config) = setup(ENTRY);

        let err =
            inject_providers(dir.path(), &config, &["redux".to_string()], false).unwrap_err();
        assert!(matches!(err, DashgenError::UnknownProvider { .. }));
    }

    #[test]
    fn dry_run_reports_but_does_not_write() {
        let (dir, config) = setup(ENTRY);

        let outcomes = inject_providers(dir.path(), &config, &[], true).unwrap();
        assert!(outcomes
            .iter()
            .all(|(_, o)| *o == InjectOutcome::Injected));
        assert_eq!(read_entry(&dir, &config), ENTRY);
    }

    #[test]
    fn custom_provider_from_config() {
        let (dir, mut config) = setup(ENTRY);
        config.inject.custom.push(CustomProvider {
            name: "store".to_string(),
            import_line: "import { StoreProvider } from '@stores/StoreProvider';".to_string(),
            open_tag: "<StoreProvider>".to_string(),
            close_tag: "</StoreProvider>".to_string(),
            preamble: None,
        });

        inject_providers(dir.path(), &config, &["store".to_string()], false).unwrap();

        let content = read_entry(&dir, &config);
        assert!(content.contains("<StoreProvider>"));
        assert!(content.contains("import { StoreProvider }"));
    }

    #[test]
    fn detection_token_strips_attributes() {
        assert_eq!(
            detection_token("<QueryClientProvider client={queryClient}>"),
            "<QueryClientProvider"
        );
        assert_eq!(detection_token("<ThemeProvider>"), "<ThemeProvider");
    }

    #[test]
    fn wrapped_block_is_reindented() {
        let (dir, config) = setup(ENTRY);

        inject_providers(dir.path(), &config, &["theme".to_string()], false).unwrap();

        let content = read_entry(&dir, &config);
        // Anchor moved one level deeper than the new wrapper
        assert!(content.contains("    <ThemeProvider>\n      <AuthProvider>"));
        assert!(content.contains("      </AuthProvider>\n    </ThemeProvider>"));
    }
}
