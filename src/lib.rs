//! Edge route generation library.
//!
//! Derives route patterns for a worker's per-environment domains and renders
//! them as an array-of-tables fragment for the deployment descriptor.

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod observability;
pub mod routing;

pub use config::schema::{DomainConfig, ProjectConfig};
pub use emit::{build_complete_routes_config, build_routes_section, validate_toml_syntax};
pub use error::{RouteError, RouteResult};
pub use routing::{get_zone_id_for_domain, RouteMapper, RouteMappingResult, RoutingPolicy};
