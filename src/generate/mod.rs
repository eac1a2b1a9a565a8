//! File generation.
//!
//! # Data Flow
//! ```text
//! ProjectConfig
//!     → GenerationInput::resolve (map every environment once, check zone id)
//!     → pipeline.rs (ordered producers, each → GeneratedFile)
//!     → writer.rs (files under the output directory)
//! ```
//!
//! # Design Decisions
//! - Producers share the resolved input read-only; no state between them
//! - The pipeline is built from concrete types, no lookup by name

pub mod pipeline;
pub mod writer;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::schema::{ProjectConfig, ENVIRONMENTS};
use crate::error::RouteError;
use crate::routing::{get_zone_id_for_domain, RouteMapper, RouteMappingResult};

pub use pipeline::{Pipeline, Producer, RouteManifest, RoutesFragment};
pub use writer::write_files;

/// A file to be written: path relative to the output directory plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Errors that can occur during generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error writing `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything producers need, resolved once up front.
#[derive(Debug, Clone)]
pub struct GenerationInput {
    pub service_name: String,
    /// One result per mapped environment; recognized environments first.
    pub results: Vec<RouteMappingResult>,
    /// Checked zone id when any environment has routes, else the raw value.
    pub zone_id: Option<String>,
    pub include_comments: bool,
    pub generated_at: DateTime<Utc>,
}

impl GenerationInput {
    /// Map every configured environment and check the zone id where routes exist.
    pub fn resolve(config: &ProjectConfig, generated_at: DateTime<Utc>) -> Result<Self, RouteError> {
        let service = &config.service;
        let mapper = RouteMapper::new(&config.policy);

        let mut environments: Vec<&str> = ENVIRONMENTS.to_vec();
        environments.extend(
            service
                .domains
                .keys()
                .map(String::as_str)
                .filter(|env| !ENVIRONMENTS.contains(env)),
        );

        let mut results = Vec::with_capacity(environments.len());
        let mut zone_id = service.zone_id.clone();
        for env in environments {
            let result = mapper.map_domain_to_routes(service, env);
            let routed = result.domain.as_deref().filter(|_| !result.is_empty());
            if let Some(domain) = routed {
                zone_id = Some(get_zone_id_for_domain(domain, service)?.to_string());
                if !ENVIRONMENTS.contains(&env) {
                    tracing::warn!(
                        environment = env,
                        "Routes for unrecognized environment are left out of the route fragment"
                    );
                }
            }
            results.push(result);
        }

        Ok(Self {
            service_name: service.name.clone(),
            results,
            zone_id,
            include_comments: config.output.include_comments,
            generated_at,
        })
    }

    pub fn route_count(&self) -> usize {
        self.results.iter().map(|r| r.patterns.len()).sum()
    }
}
