//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     main → logging.rs (subscriber: JSON on Lambda, text otherwise)
//!
//! per request:
//!     correlation.rs derives the correlation id
//!     → span bound for the request's lifetime
//!     → "request started" event
//!     → handler events, inside the span
//!     → "request completed" event (elapsed ms)
//!     → id reflected in the X-Request-ID header
//! ```
//!
//! # Design Decisions
//! - One subscriber for the process; format chosen by deployment mode
//! - Correlation ids come from the invoking platform, never minted here

pub mod correlation;
pub mod logging;

pub use correlation::correlate;
pub use correlation::X_REQUEST_ID;
