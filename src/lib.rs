//! dashgen - page scaffolder for the pickup-sports web dashboard
//!
//! dashgen renders the built-in dashboard page templates into a frontend
//! tree, patches the app entry's provider composition, and tracks what it
//! wrote so user edits are never silently clobbered.

pub mod config;
pub mod engine;
pub mod error;
pub mod inject;
pub mod manifest;
pub mod templates;
pub mod writer;

// Re-exports for convenience
pub use config::Config;
pub use engine::{generate, plan, GenerateOptions, GenerateResult};
pub use error::{DashgenError, DashgenResult};
pub use inject::{inject_providers, InjectOutcome, Provider};
pub use manifest::{FileState, Manifest};
pub use templates::{all_templates, get_template, OutputFile, Template};
