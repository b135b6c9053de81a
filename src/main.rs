//! dashgen CLI - dashboard page scaffolder
//!
//! Usage: dashgen <COMMAND>
//!
//! Commands:
//!   generate  Render page templates into the frontend tree
//!   inject    Wrap the app entry's provider composition
//!   diff      Preview changes without writing
//!   check     Validate the tree against the templates (CI gate)
//!   list      Show available templates

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use dashgen::manifest::FileState;

/// dashgen - page scaffolder and provider patcher for the dashboard frontend
#[derive(Parser, Debug)]
#[command(name = "dashgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render page templates into the frontend tree
    Generate {
        /// Frontend root directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Template ids to generate (default: all)
        #[arg(short, long)]
        template: Vec<String>,

        /// Force overwrite of user-modified files
        #[arg(short, long)]
        force: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Wrap the app entry's provider composition
    Inject {
        /// Frontend root directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Provider names to inject (default: from config)
        #[arg(short, long)]
        provider: Vec<String>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview changes without writing
    Diff {
        /// Frontend root directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Validate the tree against the templates (exits non-zero on drift)
    Check {
        /// Frontend root directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Show available templates
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            root,
            template,
            force,
            dry_run,
        } => cmd_generate(&root, template, force, dry_run, cli.json),
        Commands::Inject {
            root,
            provider,
            dry_run,
        } => cmd_inject(&root, provider, dry_run, cli.json),
        Commands::Diff { root } => cmd_diff(&root, cli.json),
        Commands::Check { root } => cmd_check(&root, cli.json),
        Commands::List => cmd_list(cli.json),
    }
}

fn cmd_generate(
    root: &Path,
    templates: Vec<String>,
    force: bool,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    use dashgen::engine::{generate, GenerateOptions};

    if !json {
        println!("📦 Dashgen Generate");
        println!("Root: {}", root.display());
        if force {
            println!("Mode: Force overwrite");
        }
        if dry_run {
            println!("Mode: Dry run");
        }
    }

    let config = dashgen::Config::load(root)?;
    let options = GenerateOptions {
        force,
        dry_run,
        templates,
    };

    let result = generate(root, &options, &config)?;

    if json {
        let output = serde_json::json!({
            "event": "generate",
            "status": if result.is_success() { "success" } else { "partial" },
            "dry_run": dry_run,
            "written": result.written,
            "unchanged": result.unchanged,
            "skipped_modified": result.skipped_modified,
            "errors": result.errors,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n📊 Generate Results:");
        if !result.written.is_empty() {
            let verb = if dry_run { "Would write" } else { "Written" };
            println!("  ✓ {}: {} files", verb, result.written.len());
            for path in &result.written {
                println!("    - {}", path);
            }
        }
        if !result.unchanged.is_empty() {
            println!("  ✓ Unchanged: {} files", result.unchanged.len());
        }
        if !result.skipped_modified.is_empty() {
            println!(
                "  ⚠ Skipped: {} files (modified by user, use --force to overwrite)",
                result.skipped_modified.len()
            );
            for path in &result.skipped_modified {
                println!("    - {}", path);
            }
        }
        if !result.errors.is_empty() {
            println!("  ✗ Errors: {}", result.errors.len());
            for err in &result.errors {
                println!("    - {}", err);
            }
        }
        println!();
    }

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_inject(root: &Path, providers: Vec<String>, dry_run: bool, json: bool) -> Result<()> {
    use dashgen::inject::{inject_providers, InjectOutcome};

    let config = dashgen::Config::load(root)?;

    if !json {
        println!("🔌 Dashgen Inject");
        println!("Root: {}", root.display());
        println!("Entry: {}", config.paths.entry.display());
        if dry_run {
            println!("Mode: Dry run");
        }
        println!();
    }

    let outcomes = inject_providers(root, &config, &providers, dry_run)?;

    if json {
        let providers: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|(name, outcome)| {
                serde_json::json!({ "provider": name, "outcome": outcome.as_str() })
            })
            .collect();
        let output = serde_json::json!({
            "event": "inject",
            "entry": config.paths.entry.display().to_string(),
            "dry_run": dry_run,
            "providers": providers,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for (name, outcome) in &outcomes {
            match outcome {
                InjectOutcome::Injected => {
                    let verb = if dry_run { "would inject" } else { "injected" };
                    println!("  ✓ {} - {}", name, verb);
                }
                InjectOutcome::AlreadyPresent => {
                    println!("  ✓ {} - already present", name);
                }
                InjectOutcome::AnchorMissing => {
                    println!(
                        "  ⚠ {} - <AuthProvider> anchor not found, skipped",
                        name
                    );
                }
            }
        }
        println!();
    }

    Ok(())
}

fn cmd_diff(root: &Path, json: bool) -> Result<()> {
    use dashgen::engine::plan;
    use dashgen::templates::all_templates;
    use similar::TextDiff;

    if !json {
        println!("📊 Dashgen Diff");
        println!("Root: {}", root.display());
        println!();
    }

    let config = dashgen::Config::load(root)?;
    let manifest = dashgen::Manifest::load(root)?;
    let outputs: Vec<_> = all_templates()
        .iter()
        .map(|t| t.render(&config.paths.pages_dir))
        .collect();
    let planned = plan(root, &outputs, &manifest)?;

    let mut new_files = Vec::new();
    let mut modified_files = Vec::new();
    let mut unchanged_files = Vec::new();

    for item in &planned {
        let path_str = item.output.path.display().to_string();
        match item.state {
            FileState::Missing => new_files.push(path_str),
            FileState::Unchanged => unchanged_files.push(path_str),
            FileState::Generated | FileState::Modified => {
                if !json && item.error.is_none() {
                    if let Ok(existing) = std::fs::read(root.join(&item.output.path)) {
                        let existing = String::from_utf8_lossy(&existing);
                        let diff =
                            TextDiff::from_lines(existing.as_ref(), item.output.content.as_str());
                        print!(
                            "{}",
                            diff.unified_diff()
                                .header(&format!("a/{}", path_str), &format!("b/{}", path_str))
                        );
                        println!();
                    }
                }
                modified_files.push(path_str);
            }
        }
    }

    if json {
        let output = serde_json::json!({
            "event": "diff",
            "new": new_files,
            "modified": modified_files,
            "unchanged": unchanged_files.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        if !new_files.is_empty() {
            println!("📁 New files ({}):", new_files.len());
            for path in &new_files {
                println!("  + {}", path);
            }
            println!();
        }
        println!(
            "Summary: {} new, {} modified, {} unchanged",
            new_files.len(),
            modified_files.len(),
            unchanged_files.len()
        );
    }

    Ok(())
}

fn cmd_check(root: &Path, json: bool) -> Result<()> {
    use dashgen::engine::plan;
    use dashgen::templates::all_templates;

    if !json {
        println!("🩺 Dashgen Check");
        println!("Root: {}", root.display());
        println!();
    }

    let config = dashgen::Config::load(root)?;
    let manifest = dashgen::Manifest::load(root)?;
    let outputs: Vec<_> = all_templates()
        .iter()
        .map(|t| t.render(&config.paths.pages_dir))
        .collect();
    let planned = plan(root, &outputs, &manifest)?;

    let mut drifted = 0usize;
    let mut checks = Vec::new();
    for item in &planned {
        let path_str = item.output.path.display().to_string();
        let (ok, status) = if item.error.is_some() {
            (false, "unreadable - check the file")
        } else {
            match item.state {
                FileState::Unchanged => (true, "up to date"),
                FileState::Missing => (false, "missing - run 'dashgen generate'"),
                FileState::Generated => (false, "stale - template changed, regenerate"),
                FileState::Modified => (false, "modified by user - diverges from template"),
            }
        };
        if !ok {
            drifted += 1;
        }
        checks.push((path_str, ok, status));
    }

    if json {
        let files: Vec<serde_json::Value> = checks
            .iter()
            .map(|(path, ok, status)| {
                serde_json::json!({ "path": path, "ok": ok, "status": status })
            })
            .collect();
        let output = serde_json::json!({
            "event": "check",
            "success": drifted == 0,
            "drifted": drifted,
            "files": files,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for (path, ok, status) in &checks {
            let icon = if *ok { "✓" } else { "✗" };
            println!("  {} {} - {}", icon, path, status);
        }
        println!();
        if drifted == 0 {
            println!("🟢 All generated files match their templates");
        } else {
            println!("🔴 {} file(s) drifted from their templates", drifted);
        }
    }

    if drifted > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_list(json: bool) -> Result<()> {
    use dashgen::templates::{all_templates, DEFAULT_PAGES_DIR};

    let templates = all_templates();

    if json {
        for template in &templates {
            let output = serde_json::json!({
                "event": "template",
                "id": template.id,
                "description": template.description,
                "path": format!("{}/{}", DEFAULT_PAGES_DIR, template.file_name),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        println!("Available templates:\n");
        for template in &templates {
            println!("┌─ {}", template.id);
            println!("│  Description: {}", template.description);
            println!("│  Path: {}/{}", DEFAULT_PAGES_DIR, template.file_name);
            println!("└─");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["dashgen", "generate"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate { .. }));
    }

    #[test]
    fn test_cli_parse_generate_with_args() {
        let cli = Cli::try_parse_from([
            "dashgen",
            "generate",
            "--root",
            "frontend-web",
            "--template",
            "games",
            "--force",
            "--dry-run",
        ])
        .unwrap();

        if let Commands::Generate {
            root,
            template,
            force,
            dry_run,
        } = cli.command
        {
            assert_eq!(root, PathBuf::from("frontend-web"));
            assert_eq!(template, vec!["games".to_string()]);
            assert!(force);
            assert!(dry_run);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_inject_with_providers() {
        let cli = Cli::try_parse_from([
            "dashgen", "inject", "--provider", "query", "--provider", "theme",
        ])
        .unwrap();

        if let Commands::Inject { provider, .. } = cli.command {
            assert_eq!(provider, vec!["query".to_string(), "theme".to_string()]);
        } else {
            panic!("Expected Inject command");
        }
    }

    #[test]
    fn test_cli_parse_diff() {
        let cli = Cli::try_parse_from(["dashgen", "diff", "--root", "web"]).unwrap();
        if let Commands::Diff { root } = cli.command {
            assert_eq!(root, PathBuf::from("web"));
        } else {
            panic!("Expected Diff command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["dashgen", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["dashgen", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["dashgen", "--json", "list"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["dashgen", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
