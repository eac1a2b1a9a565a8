//! Ordered file producers.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::SecondsFormat;
use serde::Serialize;

use crate::emit::{build_complete_routes_config, ConfigOptions, RoutesByEnvironment};
use crate::generate::{GenerateError, GeneratedFile, GenerationInput};
use crate::routing::RouteMappingResult;

/// Turns the shared input into one generated file.
pub trait Producer: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn produce(&self, input: &GenerationInput) -> Result<GeneratedFile, GenerateError>;
}

/// `routes.toml`: the combined route fragment for the deployment descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutesFragment;

impl Producer for RoutesFragment {
    fn name(&self) -> &'static str {
        "routes-fragment"
    }

    fn produce(&self, input: &GenerationInput) -> Result<GeneratedFile, GenerateError> {
        let routes = RoutesByEnvironment::from_results(&input.results);
        let domains: BTreeMap<String, String> = input
            .results
            .iter()
            .filter_map(|r| Some((r.environment.clone(), r.domain.clone()?)))
            .collect();

        let options = ConfigOptions {
            zone_id: input.zone_id.clone(),
            include_comments: input.include_comments,
            domains,
            generated_at: Some(input.generated_at),
        };

        Ok(GeneratedFile {
            path: PathBuf::from("routes.toml"),
            content: build_complete_routes_config(&routes, &options),
        })
    }
}

/// `routes.json`: per-environment mapping results for tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteManifest;

#[derive(Serialize)]
struct Manifest<'a> {
    service: &'a str,
    generated_at: String,
    zone_id: Option<&'a str>,
    environments: &'a [RouteMappingResult],
}

impl Producer for RouteManifest {
    fn name(&self) -> &'static str {
        "route-manifest"
    }

    fn produce(&self, input: &GenerationInput) -> Result<GeneratedFile, GenerateError> {
        let manifest = Manifest {
            service: &input.service_name,
            generated_at: input.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            zone_id: input.zone_id.as_deref(),
            environments: &input.results,
        };
        let mut content = serde_json::to_string_pretty(&manifest)?;
        content.push('\n');

        Ok(GeneratedFile {
            path: PathBuf::from("routes.json"),
            content,
        })
    }
}

/// Producers run in insertion order.
#[derive(Default)]
pub struct Pipeline {
    producers: Vec<Box<dyn Producer>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route fragment, then manifest.
    pub fn standard() -> Self {
        Self::new().with(RoutesFragment).with(RouteManifest)
    }

    pub fn with(mut self, producer: impl Producer + 'static) -> Self {
        self.producers.push(Box::new(producer));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.producers.iter().map(|p| p.name()).collect()
    }

    /// Run every producer. Stops at the first failure.
    pub fn run(&self, input: &GenerationInput) -> Result<Vec<GeneratedFile>, GenerateError> {
        self.producers
            .iter()
            .map(|producer| -> Result<GeneratedFile, GenerateError> {
                let file = producer.produce(input)?;
                tracing::debug!(
                    producer = producer.name(),
                    path = %file.path.display(),
                    bytes = file.content.len(),
                    "Produced file"
                );
                Ok(file)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DomainConfig, ProjectConfig};
    use chrono::{TimeZone, Utc};

    fn input() -> GenerationInput {
        let config = ProjectConfig {
            service: DomainConfig {
                name: "billing".into(),
                ..Default::default()
            }
            .with_domain("production", "api.example.com")
            .with_domain("development", "billing.workers.dev")
            .with_zone_id("0123456789abcdef0123456789abcdef"),
            ..Default::default()
        };
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        GenerationInput::resolve(&config, at).unwrap()
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(Pipeline::standard().names(), vec!["routes-fragment", "route-manifest"]);
    }

    #[test]
    fn test_routes_fragment() {
        let file = RoutesFragment.produce(&input()).unwrap();
        assert_eq!(file.path, PathBuf::from("routes.toml"));
        assert!(file.content.contains("# Generated at: 2026-03-01T12:00:00Z"));
        assert!(file.content.contains("# Domain: api.example.com"));
        assert!(file.content.contains("pattern = \"example.com/api/*\""));
        assert!(!file.content.contains("env.development"));
    }

    #[test]
    fn test_route_manifest() {
        let file = RouteManifest.produce(&input()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&file.content).unwrap();
        assert_eq!(json["service"], "billing");
        assert_eq!(json["generated_at"], "2026-03-01T12:00:00Z");
        assert_eq!(json["environments"][0]["environment"], "production");
        assert_eq!(json["environments"][0]["patterns"][1], "example.com/api/*");
        assert_eq!(json["environments"][2]["patterns"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_run_produces_every_file() {
        let files = Pipeline::standard().run(&input()).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.to_string_lossy().into_owned()).collect();
        assert_eq!(paths, vec!["routes.toml", "routes.json"]);
    }

    #[test]
    fn test_empty_pipeline() {
        assert!(Pipeline::new().run(&input()).unwrap().is_empty());
    }
}
