//! Domain-to-route mapping.
//!
//! # Responsibilities
//! - Turn one environment's domain assignment into route patterns
//! - Order patterns most-specific first
//! - Resolve the path prefix (explicit, derived, or policy default)
//! - Look up and check the zone identifier for a domain
//!
//! # Design Decisions
//! - Pure: output depends only on the config, environment and policy
//! - An unassigned or wildcard-space domain yields no patterns, not an error
//! - Unrecognized environments take the same branches as known ones

use serde::Serialize;

use crate::config::schema::DomainConfig;
use crate::error::{RouteError, RouteResult, ZONE_ID_FORMAT};
use crate::routing::domain::{self, DomainKind};
use crate::routing::policy::RoutingPolicy;

/// Route patterns derived for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMappingResult {
    /// Route patterns, most specific first. May be empty.
    pub patterns: Vec<String>,
    /// Zone identifier passed through from the input.
    pub zone_id: Option<String>,
    /// Environment these patterns were computed for.
    pub environment: String,
    /// Normalized domain the patterns came from, when one was assigned.
    pub domain: Option<String>,
}

impl RouteMappingResult {
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Maps domain assignments to route patterns under a routing policy.
#[derive(Debug, Clone, Default)]
pub struct RouteMapper<P> {
    policy: P,
}

impl<P: RoutingPolicy> RouteMapper<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Derive the route patterns for `environment`.
    pub fn map_domain_to_routes(&self, config: &DomainConfig, environment: &str) -> RouteMappingResult {
        let assigned = config.domain_for(environment).and_then(domain::normalize);

        let patterns = match assigned.as_deref() {
            None => Vec::new(),
            Some(d) if domain::is_wildcard(d, self.policy.wildcard_suffix()) => Vec::new(),
            Some(d) => self.patterns_for(d, config, environment),
        };

        tracing::debug!(
            environment,
            domain = assigned.as_deref().unwrap_or("-"),
            routes = patterns.len(),
            "Mapped domain to routes"
        );

        RouteMappingResult {
            patterns,
            zone_id: config.zone_id.clone(),
            environment: environment.to_string(),
            domain: assigned,
        }
    }

    fn patterns_for(&self, domain: &str, config: &DomainConfig, environment: &str) -> Vec<String> {
        let explicit = config.api_base_path.as_deref().map(normalize_path_prefix);

        match domain::classify(domain) {
            DomainKind::Subdomain { label, root } => {
                let prefix = explicit.unwrap_or_else(|| format!("/{label}"));
                vec![format!("{domain}/*"), format!("{root}{prefix}/*")]
            }
            DomainKind::Root => {
                let prefix = explicit.unwrap_or_else(|| {
                    normalize_path_prefix(self.policy.default_path_prefix(environment))
                });
                vec![format!("{domain}{prefix}/*")]
            }
        }
    }
}

/// Normalize a path prefix to `/segment[/segment...]` or the empty string.
pub fn normalize_path_prefix(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Whether `zone_id` is exactly 32 lowercase hexadecimal characters.
pub fn is_valid_zone_id(zone_id: &str) -> bool {
    zone_id.len() == 32 && zone_id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Zone identifier to attach to routes for `domain`.
///
/// Fails with a configuration error when no zone id is set and with a
/// validation error when it is not 32 lowercase hex characters.
pub fn get_zone_id_for_domain<'a>(domain: &str, config: &'a DomainConfig) -> RouteResult<&'a str> {
    let zone_id = match config.zone_id.as_deref().map(str::trim) {
        Some(z) if !z.is_empty() => z,
        _ => {
            return Err(RouteError::Configuration {
                domain: domain.to_string(),
                message: "zone id is required to attach custom routes".to_string(),
            })
        }
    };

    if !is_valid_zone_id(zone_id) {
        return Err(RouteError::Validation {
            domain: domain.to_string(),
            value: zone_id.to_string(),
            expected: ZONE_ID_FORMAT,
        });
    }

    Ok(zone_id)
}
