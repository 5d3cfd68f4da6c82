//! Structured JSON response bodies.
//!
//! # Data Flow
//! ```text
//! handler
//!     → body.rs (ResponseBody::new + with_* builder calls)
//!     → emitter.rs (localize message, set status, write JSON)
//!     → client receives {"code", "data", "message", "cause"?}
//! ```
//!
//! # Design Decisions
//! - Builder methods consume and return the body, so chains read left to right
//! - Status code and locale parameters stay server-side
//! - Localization failure degrades to the raw message, never to an error

pub mod body;
pub mod common;
pub mod emitter;

pub use body::ResponseBody;
pub use emitter::{respond_with, EmitError, Emission, RequestContext};
pub use crate::i18n::LocaleParams;
