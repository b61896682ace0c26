//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request (TCP socket or Lambda gateway)
//!     → server.rs (router, version header layer)
//!     → observability::correlation (id, span, start/complete events)
//!     → handler.rs (method gate, body capture, one send)
//!     → fixed response body
//! ```

pub mod handler;
pub mod server;

pub use handler::{relay, RelayError, CONFIRMATION};
pub use server::{build_router, serve, AppState, X_VERSION};
