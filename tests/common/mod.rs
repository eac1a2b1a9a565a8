//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

pub const ZONE_ID: &str = "0123456789abcdef0123456789abcdef";

/// A project file covering all three environments.
pub fn project_toml() -> String {
    format!(
        r#"
[service]
name = "billing-worker"
zone_id = "{ZONE_ID}"

[service.domains]
production = "api.example.com"
staging = "example.dev"
development = "billing.acme.workers.dev"

[policy.path_prefixes]
production = "/api"
staging = "/beta"

[observability]
log_level = "debug"
"#
    )
}

/// Write `content` as `edge-routes.toml` in a fresh temp dir.
pub fn write_project(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edge-routes.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
