//! Response descriptor and its builder.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::i18n::LocaleParams;

fn default_status_code() -> StatusCode {
    StatusCode::BAD_REQUEST
}

/// One response outcome to be sent to a client.
///
/// Serializes as `{"code", "data", "message", "cause"?}`. The status code and
/// the locale parameters never reach the wire; `cause` is omitted when unset.
///
/// The body also implements [`std::error::Error`] (displaying its message),
/// so handlers can return it through `?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
#[must_use]
pub struct ResponseBody {
    code: String,

    #[serde(default)]
    data: Value,

    /// Display text or a message ID, replaced by its localization on emit.
    message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<String>,

    #[serde(skip, default = "default_status_code")]
    status_code: StatusCode,

    #[serde(skip)]
    locale_params: LocaleParams,
}

impl ResponseBody {
    /// Create a body with no data, no cause, no parameters and status 400.
    ///
    /// `message` may be display text or a message ID for the localizer.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            data: Value::Null,
            message: message.into(),
            cause: None,
            status_code: default_status_code(),
            locale_params: LocaleParams::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set one locale parameter, replacing any previous value for `key`.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.locale_params.insert(key.into(), value.into());
        self
    }

    /// Merge `params` into the locale parameters; later values win.
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.locale_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn locale_params(&self) -> &LocaleParams {
        &self.locale_params
    }

    pub fn has_locale_params(&self) -> bool {
        !self.locale_params.is_empty()
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

/// Send the body as-is, without localizing the message.
impl IntoResponse for ResponseBody {
    fn into_response(self) -> Response {
        let status = self.status_code;
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let body = ResponseBody::new("CLT001", "errors.bad_request");
        assert_eq!(body.code(), "CLT001");
        assert_eq!(body.message(), "errors.bad_request");
        assert_eq!(body.data(), &Value::Null);
        assert_eq!(body.cause(), None);
        assert_eq!(body.status_code(), StatusCode::BAD_REQUEST);
        assert!(body.locale_params().is_empty());
        assert!(!body.has_locale_params());
    }

    #[test]
    fn test_builder_chain() {
        let body = ResponseBody::new("OK0001", "ok")
            .with_data(json!({"id": 7}))
            .with_status_code(StatusCode::OK)
            .with_cause("upstream")
            .with_message("done")
            .with_code("OK0002");

        assert_eq!(body.code(), "OK0002");
        assert_eq!(body.message(), "done");
        assert_eq!(body.data(), &json!({"id": 7}));
        assert_eq!(body.cause(), Some("upstream"));
        assert_eq!(body.status_code(), StatusCode::OK);
    }

    #[test]
    fn test_param_last_write_wins() {
        let body = ResponseBody::new("VAL001", "validation.field.required")
            .with_param("field", "email")
            .with_param("field", "phone");
        assert_eq!(body.locale_params().len(), 1);
        assert_eq!(body.locale_params()["field"], json!("phone"));
    }

    #[test]
    fn test_params_merge() {
        let body = ResponseBody::new("VAL002", "validation.username.length")
            .with_param("min", 1)
            .with_params([("min", json!(3)), ("max", json!(20))]);
        assert_eq!(body.locale_params().len(), 2);
        assert_eq!(body.locale_params()["min"], json!(3));
        assert_eq!(body.locale_params()["max"], json!(20));
    }

    #[test]
    fn test_serialize_omits_internal_fields() {
        let body = ResponseBody::new("CLT001", "Bad request")
            .with_status_code(StatusCode::NOT_FOUND)
            .with_param("field", "email");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"code": "CLT001", "data": null, "message": "Bad request"})
        );
    }

    #[test]
    fn test_serialize_cause() {
        let value = serde_json::to_value(ResponseBody::new("E1", "m").with_cause("x")).unwrap();
        assert_eq!(value["cause"], json!("x"));

        let value = serde_json::to_value(ResponseBody::new("E1", "m").with_cause("")).unwrap();
        assert_eq!(value["cause"], json!(""));
    }

    #[test]
    fn test_deserialize_wire_body() {
        let body: ResponseBody =
            serde_json::from_str(r#"{"code":"CLT002","message":"Not found"}"#).unwrap();
        assert_eq!(body, ResponseBody::new("CLT002", "Not found"));
    }

    #[test]
    fn test_display_is_message() {
        let body = ResponseBody::new("AUT001", "errors.unauthorized");
        assert_eq!(body.to_string(), "errors.unauthorized");
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = ResponseBody::new("CLT002", "errors.not_found")
            .with_status_code(StatusCode::NOT_FOUND)
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
