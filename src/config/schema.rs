//! Configuration schema definitions.
//!
//! This module defines the project file structure for route generation.
//! All types derive Serde traits for deserialization from TOML.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PRODUCTION: &str = "production";
pub const STAGING: &str = "staging";
pub const DEVELOPMENT: &str = "development";

/// Recognized environments, in emission order.
pub const ENVIRONMENTS: [&str; 3] = [PRODUCTION, STAGING, DEVELOPMENT];

/// Root configuration for a route generation project.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// The logical service and its domain assignments.
    pub service: DomainConfig,

    /// Routing policy (wildcard suffix, default path prefixes).
    pub policy: PolicyConfig,

    /// Output formatting and destination.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Domain assignments of one logical service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DomainConfig {
    /// Service name, used in generated comments and manifests.
    pub name: String,

    /// Environment name to fully-qualified domain.
    pub domains: BTreeMap<String, String>,

    /// Zone identifier (32 lowercase hex characters).
    pub zone_id: Option<String>,

    /// Explicit path prefix; overrides any derived prefix.
    pub api_base_path: Option<String>,
}

impl DomainConfig {
    /// Domain assigned to `environment`, if any.
    pub fn domain_for(&self, environment: &str) -> Option<&str> {
        self.domains.get(environment).map(String::as_str)
    }

    pub fn with_domain(mut self, environment: impl Into<String>, domain: impl Into<String>) -> Self {
        self.domains.insert(environment.into(), domain.into());
        self
    }

    pub fn with_zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    pub fn with_api_base_path(mut self, path: impl Into<String>) -> Self {
        self.api_base_path = Some(path.into());
        self
    }
}

/// Routing policy settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Platform-provided wildcard subdomain space (no route needed).
    pub wildcard_suffix: String,

    /// Default path prefix per environment when no `api_base_path` is set.
    pub path_prefixes: BTreeMap<String, String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            wildcard_suffix: ".workers.dev".to_string(),
            path_prefixes: ENVIRONMENTS
                .iter()
                .map(|env| (env.to_string(), "/api".to_string()))
                .collect(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Prepend descriptive comments to generated sections.
    pub include_comments: bool,

    /// Directory generated files are written to.
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_comments: true,
            directory: "generated".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
