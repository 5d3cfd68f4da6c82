//! Response emission.
//!
//! # Responsibilities
//! - Localize the body's message through the request context
//! - Apply the body's status code
//! - Write the body as JSON, exactly once
//!
//! # Design Decisions
//! - A failed lookup keeps the raw message; the client never sees the error
//! - Without a request context nothing is written and the body is handed back

use axum::http::StatusCode;
use thiserror::Error;

use crate::i18n::{LocaleParams, LocalizeError};
use crate::response::ResponseBody;

/// Errors raised while writing a response.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The request/response handle a body is emitted onto.
pub trait RequestContext {
    /// Resolve `message_id` in the request's language.
    fn localize(
        &self,
        message_id: &str,
        template_data: Option<&LocaleParams>,
    ) -> Result<String, LocalizeError>;

    fn set_status(&mut self, status: StatusCode);

    fn write_json(&mut self, body: &ResponseBody) -> Result<(), EmitError>;
}

/// Result of emitting a body.
#[derive(Debug)]
pub enum Emission {
    /// Status and body were written to the context.
    Sent,
    /// No context was available; the body is returned untouched.
    Detached(ResponseBody),
}

impl Emission {
    pub fn is_sent(&self) -> bool {
        matches!(self, Emission::Sent)
    }

    pub fn into_detached(self) -> Option<ResponseBody> {
        match self {
            Emission::Sent => None,
            Emission::Detached(body) => Some(body),
        }
    }
}

/// Localize `body`, then write its status and JSON form onto `ctx`.
pub fn respond_with<C>(ctx: Option<&mut C>, mut body: ResponseBody) -> Result<Emission, EmitError>
where
    C: RequestContext + ?Sized,
{
    let Some(ctx) = ctx else {
        return Ok(Emission::Detached(body));
    };

    localize_message(&*ctx, &mut body);
    ctx.set_status(body.status_code());
    ctx.write_json(&body)?;
    Ok(Emission::Sent)
}

fn localize_message<C>(ctx: &C, body: &mut ResponseBody)
where
    C: RequestContext + ?Sized,
{
    let template_data = body.has_locale_params().then(|| body.locale_params());

    match ctx.localize(body.message(), template_data) {
        Ok(localized) => body.set_message(localized),
        Err(e) => {
            tracing::debug!(
                code = %body.code(),
                message_id = %body.message(),
                error = %e,
                "Localization failed, keeping raw message"
            );
        }
    }
}

impl ResponseBody {
    /// Method form of [`respond_with`].
    pub fn response<C>(self, ctx: Option<&mut C>) -> Result<Emission, EmitError>
    where
        C: RequestContext + ?Sized,
    {
        respond_with(ctx, self)
    }
}
