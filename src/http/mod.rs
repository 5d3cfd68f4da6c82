//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, localizer extension)
//!     → handler builds a ResponseBody
//!     → context.rs (Responder → HttpContext → emitter)
//!     → status + JSON body to client
//! ```

pub mod context;
pub mod server;

pub use context::{HttpContext, Responder};
pub use server::HttpServer;
