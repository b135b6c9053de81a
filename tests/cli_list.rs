//! Integration tests for `dashgen list`

mod common;

use common::{run, stdout};
use tempfile::tempdir;

#[test]
fn list_shows_all_templates() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for id in ["settings", "games", "mock-data"] {
        assert!(text.contains(id), "expected template '{}' in list", id);
    }
    assert!(text.contains("src/pages/dashboard/SettingsPage.tsx"));
}

#[test]
fn list_json_emits_one_event_per_template() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["--json", "list"]);
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    for event in &lines {
        assert_eq!(event["event"], "template");
        assert!(event["id"].is_string());
        assert!(event["path"].is_string());
    }
}
