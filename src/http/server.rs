//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the demo handlers
//! - Install the configured localizer for every request
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{response::Response, routing::get, Extension, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::context::Responder;
use crate::i18n::{builtin, MessageCatalog, SharedLocalizer};
use crate::response::{common, ResponseBody};

/// Demo HTTP server exposing one route per response shape.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server localizing with the built-in catalog of the configured
    /// language. An unknown language falls back to an empty catalog, which
    /// leaves every message untranslated.
    pub fn new(config: ServerConfig) -> Self {
        let catalog = builtin::catalog(&config.i18n.language).unwrap_or_else(|| {
            tracing::warn!(
                language = %config.i18n.language,
                "No built-in catalog for language, messages will not be translated"
            );
            MessageCatalog::new(config.i18n.language.clone())
        });
        Self::with_localizer(config, Arc::new(catalog))
    }

    /// Create a server with a caller-supplied localizer.
    pub fn with_localizer(config: ServerConfig, localizer: SharedLocalizer) -> Self {
        let router = Self::build_router(&config, localizer);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, localizer: SharedLocalizer) -> Router {
        Router::new()
            .route("/test-bad-request", get(bad_request_handler))
            .route("/test-not-found", get(not_found_handler))
            .route("/test-unauthorized", get(unauthorized_handler))
            .route("/test-field-required", get(field_required_handler))
            .route("/test-username-length", get(username_length_handler))
            .route("/test-field", get(field_handler))
            .layer(Extension(localizer))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            language = %self.config.i18n.language,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn bad_request_handler(responder: Responder) -> Response {
    responder.response(common::bad_request())
}

async fn not_found_handler(responder: Responder) -> Response {
    responder.response(common::not_found())
}

async fn unauthorized_handler(responder: Responder) -> Response {
    responder.response(common::unauthorized())
}

async fn field_required_handler(responder: Responder) -> Response {
    responder.response(common::field_required("email"))
}

async fn username_length_handler(responder: Responder) -> Response {
    let body = ResponseBody::new("VAL002", "validation.username.length")
        .with_param("min", 3)
        .with_param("max", 20);
    responder.response(body)
}

async fn field_handler(responder: Responder) -> Response {
    responder.response(common::field_required("อีเมล"))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
