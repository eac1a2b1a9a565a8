//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! DomainConfig + environment
//!     → domain.rs (normalize, wildcard check, subdomain/root classification)
//!     → policy.rs (wildcard suffix, default path prefix)
//!     → mapper.rs (ordered route patterns)
//!     → RouteMappingResult
//! ```
//!
//! # Design Decisions
//! - Stateless: every call is independent and safe to run concurrently
//! - Deterministic: same input always yields the same patterns
//! - Most specific pattern first

pub mod domain;
pub mod mapper;
pub mod policy;

pub use mapper::{get_zone_id_for_domain, RouteMapper, RouteMappingResult};
pub use policy::RoutingPolicy;
