//! axum request context for response emission.
//!
//! # Responsibilities
//! - Carry the request's localizer into the emitter
//! - Buffer the status and serialized body until the handler returns
//! - Provide the `Responder` extractor used by handlers
//!
//! # Design Decisions
//! - The localizer is installed as a request extension (`Extension<SharedLocalizer>`)
//! - A missing localizer is not fatal: messages go out untranslated

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::i18n::{LocaleParams, Localize, LocalizeError, SharedLocalizer};
use crate::response::{respond_with, EmitError, RequestContext, ResponseBody};

/// Response under construction for one request.
pub struct HttpContext {
    localizer: Option<SharedLocalizer>,
    status: StatusCode,
    body: Option<Vec<u8>>,
}

impl HttpContext {
    pub fn new(localizer: Option<SharedLocalizer>) -> Self {
        Self {
            localizer,
            status: StatusCode::OK,
            body: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Serialized body, if one has been written.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl RequestContext for HttpContext {
    fn localize(
        &self,
        message_id: &str,
        template_data: Option<&LocaleParams>,
    ) -> Result<String, LocalizeError> {
        match &self.localizer {
            Some(localizer) => localizer.localize(message_id, template_data),
            None => Err(LocalizeError::Unavailable),
        }
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn write_json(&mut self, body: &ResponseBody) -> Result<(), EmitError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(())
    }
}

impl IntoResponse for HttpContext {
    fn into_response(self) -> Response {
        match self.body {
            Some(bytes) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                bytes,
            )
                .into_response(),
            None => self.status.into_response(),
        }
    }
}

/// Extractor that emits response bodies for the current request.
///
/// ```rust,ignore
/// async fn handler(responder: Responder) -> Response {
///     responder.response(common::not_found())
/// }
/// ```
#[derive(Clone, Default)]
pub struct Responder {
    localizer: Option<SharedLocalizer>,
}

impl Responder {
    pub fn new(localizer: Option<SharedLocalizer>) -> Self {
        Self { localizer }
    }

    /// Localize, apply the status and serialize `body`.
    pub fn response(self, body: ResponseBody) -> Response {
        let mut ctx = HttpContext::new(self.localizer);
        match respond_with(Some(&mut ctx), body) {
            Ok(_) => ctx.into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to write response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for Responder
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let localizer = parts.extensions.get::<SharedLocalizer>().cloned();
        if localizer.is_none() {
            tracing::debug!("No localizer installed for request");
        }
        Ok(Self::new(localizer))
    }
}
