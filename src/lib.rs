//! Localized JSON response bodies for axum services.

pub mod config;
pub mod http;
pub mod i18n;
pub mod observability;
pub mod response;

pub use config::schema::ServerConfig;
pub use http::{HttpServer, Responder};
pub use i18n::{Localize, LocalizeError, MessageCatalog, SharedLocalizer};
pub use response::{respond_with, Emission, RequestContext, ResponseBody};
