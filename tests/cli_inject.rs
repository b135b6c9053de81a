//! Integration tests for `dashgen inject`

mod common;

use std::fs;

use common::{json_event, run, write_entry, ENTRY_WITHOUT_ANCHOR, ENTRY_WITH_ANCHOR};
use tempfile::tempdir;

#[test]
fn inject_wraps_auth_provider() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), ENTRY_WITH_ANCHOR);

    let output = run(dir.path(), &["inject", "--json"]);
    assert!(
        output.status.success(),
        "inject failed: {}",
        common::stderr(&output)
    );

    let content = fs::read_to_string(dir.path().join("src/App.tsx")).unwrap();
    assert!(content.contains("import { QueryClient, QueryClientProvider } from '@tanstack/react-query';"));
    assert!(content.contains("const queryClient = new QueryClient();"));

    let query = content.find("<QueryClientProvider").unwrap();
    let theme = content.find("<ThemeProvider>").unwrap();
    let auth = content.find("<AuthProvider>").unwrap();
    assert!(query < theme && theme < auth, "providers should nest around the anchor");
}

#[test]
fn inject_twice_is_idempotent() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), ENTRY_WITH_ANCHOR);

    run(dir.path(), &["inject"]);
    let first = fs::read_to_string(dir.path().join("src/App.tsx")).unwrap();

    let output = run(dir.path(), &["inject", "--json"]);
    let second = fs::read_to_string(dir.path().join("src/App.tsx")).unwrap();

    assert_eq!(first, second, "second inject must not change the entry");
    let event = json_event(&output);
    for provider in event["providers"].as_array().unwrap() {
        assert_eq!(provider["outcome"], "already-present");
    }
}

#[test]
fn inject_missing_anchor_is_guarded_no_op() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), ENTRY_WITHOUT_ANCHOR);

    let output = run(dir.path(), &["inject", "--json"]);
    assert!(output.status.success(), "guarded no-op must exit zero");

    let event = json_event(&output);
    for provider in event["providers"].as_array().unwrap() {
        assert_eq!(provider["outcome"], "anchor-missing");
    }
    assert_eq!(
        fs::read_to_string(dir.path().join("src/App.tsx")).unwrap(),
        ENTRY_WITHOUT_ANCHOR
    );
}

#[test]
fn inject_missing_entry_is_an_error() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["inject"]);
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("app entry file not found"));
}

#[test]
fn inject_single_provider_flag() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), ENTRY_WITH_ANCHOR);

    let output = run(dir.path(), &["inject", "--provider", "theme", "--json"]);
    assert!(output.status.success());

    let content = fs::read_to_string(dir.path().join("src/App.tsx")).unwrap();
    assert!(content.contains("<ThemeProvider>"));
    assert!(!content.contains("<QueryClientProvider"));
}

#[test]
fn inject_unknown_provider_fails() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), ENTRY_WITH_ANCHOR);

    let output = run(dir.path(), &["inject", "--provider", "redux"]);
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("unknown provider 'redux'"));
}

#[test]
fn inject_dry_run_leaves_entry_untouched() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), ENTRY_WITH_ANCHOR);

    let output = run(dir.path(), &["inject", "--dry-run", "--json"]);
    assert!(output.status.success());

    let event = json_event(&output);
    assert_eq!(event["dry_run"], true);
    assert_eq!(
        fs::read_to_string(dir.path().join("src/App.tsx")).unwrap(),
        ENTRY_WITH_ANCHOR
    );
}

#[test]
fn inject_custom_provider_from_config() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), ENTRY_WITH_ANCHOR);
    fs::write(
        dir.path().join("dashgen.toml"),
        r#"
[inject]
providers = ["store"]

[[inject.custom]]
name = "store"
import_line = "import { StoreProvider } from '@stores/StoreProvider';"
open_tag = "<StoreProvider>"
close_tag = "</StoreProvider>"
"#,
    )
    .unwrap();

    let output = run(dir.path(), &["inject"]);
    assert!(output.status.success());

    let content = fs::read_to_string(dir.path().join("src/App.tsx")).unwrap();
    assert!(content.contains("<StoreProvider>"));
    assert!(!content.contains("<QueryClientProvider"));
}

#[test]
fn inject_custom_entry_path_from_config() {
    let dir = tempdir().unwrap();
    let entry = dir.path().join("src/main.tsx");
    fs::create_dir_all(entry.parent().unwrap()).unwrap();
    fs::write(&entry, ENTRY_WITH_ANCHOR).unwrap();
    fs::write(
        dir.path().join("dashgen.toml"),
        "[paths]\nentry = \"src/main.tsx\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["inject", "--provider", "theme"]);
    assert!(output.status.success());
    assert!(fs::read_to_string(&entry).unwrap().contains("<ThemeProvider>"));
}
