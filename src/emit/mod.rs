//! Route configuration output.
//!
//! # Data Flow
//! ```text
//! RouteMappingResult (per environment)
//!     → builder.rs (array-of-tables sections, banner)
//!     → escape.rs (string values, table keys)
//!     → configuration fragment text
//!     → syntax.rs (optional structural check)
//! ```

pub mod builder;
pub mod escape;
pub mod syntax;

pub use builder::{
    build_complete_routes_config, build_routes_section, ConfigOptions, RoutesByEnvironment,
    SectionOptions,
};
pub use syntax::{validate_toml_syntax, SyntaxReport};
