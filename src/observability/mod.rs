//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! HTTP layer adds:
//!     → tower_http TraceLayer spans per request
//!     → x-request-id set and propagated on every response
//! ```
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Localization misses are logged at debug and never change the response

pub mod logging;
