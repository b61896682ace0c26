//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (lookup & validate required variables)
//!     → RelayConfig (validated, immutable)
//!     → read-only for the rest of the process lifetime
//! ```
//!
//! # Design Decisions
//! - Configuration comes from the environment only; no files, no reload
//! - Missing or empty credentials abort startup before any listener binds
//! - Optional values fall back to fixed defaults (port 8080, crate version)

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::ListenerConfig;
pub use schema::PushoverConfig;
pub use schema::RelayConfig;
pub use schema::Runtime;
