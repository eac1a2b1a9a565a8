//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check domain shapes and zone id format
//! - Check path prefixes and the wildcard suffix
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProjectConfig → Result<(), Vec<ValidationIssue>>
//! - A missing zone id is only an error when some environment needs routes

use thiserror::Error;

use crate::config::schema::ProjectConfig;
use crate::routing::domain;
use crate::routing::mapper::{get_zone_id_for_domain, is_valid_zone_id};
use crate::routing::RoutingPolicy;

/// A single semantic problem in a project file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationIssue {
    /// Dotted path of the offending field (e.g. `service.domains.staging`).
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a loaded project configuration.
pub fn validate_config(config: &ProjectConfig) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    let service = &config.service;
    let policy = &config.policy;

    if policy.wildcard_suffix.trim().is_empty() {
        issues.push(ValidationIssue::new("policy.wildcard_suffix", "must not be empty"));
    }

    for (env, prefix) in &policy.path_prefixes {
        if !prefix.is_empty() && !prefix.starts_with('/') {
            issues.push(ValidationIssue::new(
                format!("policy.path_prefixes.{env}"),
                format!("`{prefix}` must start with `/`"),
            ));
        }
    }

    if let Some(path) = &service.api_base_path {
        if !path.is_empty() && !path.starts_with('/') {
            issues.push(ValidationIssue::new(
                "service.api_base_path",
                format!("`{path}` must start with `/`"),
            ));
        }
    }

    let mut first_routed = None;
    for (env, raw) in &service.domains {
        if raw.trim().is_empty() {
            continue;
        }
        let Some(normalized) = domain::normalize(raw) else {
            issues.push(ValidationIssue::new(
                format!("service.domains.{env}"),
                format!("`{}` has an empty label", raw.trim()),
            ));
            continue;
        };
        if let Err(message) = check_domain_shape(&normalized) {
            issues.push(ValidationIssue::new(format!("service.domains.{env}"), message));
            continue;
        }
        if first_routed.is_none() && !domain::is_wildcard(&normalized, policy.wildcard_suffix()) {
            first_routed = Some(normalized);
        }
    }

    match (&first_routed, service.zone_id.as_deref()) {
        (Some(domain), _) => {
            if let Err(err) = get_zone_id_for_domain(domain, service) {
                issues.push(ValidationIssue::new("service.zone_id", err.to_string()));
            }
        }
        (None, Some(zone_id)) if !zone_id.is_empty() && !is_valid_zone_id(zone_id) => {
            issues.push(ValidationIssue::new(
                "service.zone_id",
                format!("`{zone_id}` is not {}", crate::error::ZONE_ID_FORMAT),
            ));
        }
        _ => {}
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Hostname sanity check on a normalized domain.
fn check_domain_shape(domain: &str) -> Result<(), String> {
    if domain.contains("://") {
        return Err(format!("`{domain}` must be a bare hostname, not a URL"));
    }
    if let Some(c) = domain.chars().find(|c| matches!(c, '/' | ':' | '*' | '?' | '#') || c.is_whitespace()) {
        return Err(format!("`{domain}` contains invalid character `{c}`"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(format!("`{domain}` needs at least two labels"));
    }
    for label in labels {
        if label.is_empty() {
            return Err(format!("`{domain}` has an empty label"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("label `{label}` in `{domain}` starts or ends with `-`"));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("label `{label}` in `{domain}` contains invalid characters"));
        }
    }
    Ok(())
}
