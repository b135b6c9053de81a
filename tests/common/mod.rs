//! Common test utilities for dashgen integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Path to the dashgen binary under test
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_dashgen")
}

/// Run dashgen with the given args against a frontend root
pub fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .current_dir(root)
        .args(args)
        .output()
        .expect("failed to run dashgen")
}

/// App entry fixture with the provider anchor in place
pub const ENTRY_WITH_ANCHOR: &str = r#"import React from 'react'
import { AuthProvider } from './auth/AuthContext'

export default function App() {
  return (
    <AuthProvider>
      <AppContent />
    </AuthProvider>
  )
}
"#;

/// App entry fixture without the anchor
pub const ENTRY_WITHOUT_ANCHOR: &str = r#"import React from 'react'

export default function App() {
  return <AppContent />
}
"#;

/// Write the default app entry (src/App.tsx) under the root
pub fn write_entry(root: &Path, content: &str) {
    let entry = root.join("src/App.tsx");
    fs::create_dir_all(entry.parent().unwrap()).unwrap();
    fs::write(entry, content).unwrap();
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse the single JSON event line a --json command prints
pub fn json_event(output: &Output) -> serde_json::Value {
    let text = stdout(output);
    let line = text.lines().next().unwrap_or_default();
    serde_json::from_str(line)
        .unwrap_or_else(|e| panic!("invalid JSON output: {e}\nstdout: {text}"))
}
