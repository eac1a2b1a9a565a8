//! Routing policy provider.
//!
//! The mapper only sees a policy through two accessors, so callers can
//! supply their own rules without touching the mapping logic.

use crate::config::schema::{PolicyConfig, PRODUCTION};

/// Source of platform routing rules.
pub trait RoutingPolicy: Send + Sync + std::fmt::Debug {
    /// Suffix of the platform's wildcard subdomain space.
    fn wildcard_suffix(&self) -> &str;

    /// Path prefix used for `environment` when no explicit base path is set.
    fn default_path_prefix(&self, environment: &str) -> &str;
}

impl RoutingPolicy for PolicyConfig {
    fn wildcard_suffix(&self) -> &str {
        &self.wildcard_suffix
    }

    /// Unknown environments fall back to the production prefix.
    fn default_path_prefix(&self, environment: &str) -> &str {
        self.path_prefixes
            .get(environment)
            .or_else(|| self.path_prefixes.get(PRODUCTION))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl<P: RoutingPolicy + ?Sized> RoutingPolicy for &P {
    fn wildcard_suffix(&self) -> &str {
        (**self).wildcard_suffix()
    }

    fn default_path_prefix(&self, environment: &str) -> &str {
        (**self).default_path_prefix(environment)
    }
}
