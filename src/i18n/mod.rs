//! Localization seam.
//!
//! # Data Flow
//! ```text
//! ResponseBody.message (message ID)
//!     + ResponseBody.locale_params (template data, optional)
//!     → Localize::localize
//!     → localized text, or LocalizeError (caller keeps the raw ID)
//! ```
//!
//! # Design Decisions
//! - The lookup is a trait so the emitter never depends on a concrete bundle
//! - Language selection happens before a localizer reaches the emitter
//! - Localizers are immutable and shared across requests via `Arc`

pub mod builtin;
pub mod catalog;

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

pub use catalog::MessageCatalog;

/// Named values substituted into a localized message template.
pub type LocaleParams = HashMap<String, serde_json::Value>;

/// Localizer shared between the router and every request.
pub type SharedLocalizer = Arc<dyn Localize>;

/// Errors returned by a localization lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocalizeError {
    /// No message with this ID exists for the language.
    #[error("message \"{id}\" not found for language \"{language}\"")]
    MessageNotFound { id: String, language: String },

    /// The message exists but its template could not be rendered.
    #[error("template for message \"{id}\" is invalid: {reason}")]
    Template { id: String, reason: String },

    /// No localizer is attached to the request.
    #[error("no localizer available")]
    Unavailable,
}

/// Resolves a message ID (plus optional template data) to display text.
pub trait Localize: Send + Sync {
    fn localize(
        &self,
        message_id: &str,
        template_data: Option<&LocaleParams>,
    ) -> Result<String, LocalizeError>;
}

impl<L: Localize + ?Sized> Localize for Arc<L> {
    fn localize(
        &self,
        message_id: &str,
        template_data: Option<&LocaleParams>,
    ) -> Result<String, LocalizeError> {
        (**self).localize(message_id, template_data)
    }
}
