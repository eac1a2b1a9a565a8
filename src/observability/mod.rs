//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → logging.rs (subscriber: env filter + fmt layer)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;
