//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! project file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProjectConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DomainConfig, ObservabilityConfig, OutputConfig, PolicyConfig, ProjectConfig};
pub use validation::{validate_config, ValidationIssue};
