//! Ready-made bodies for common client errors.

use axum::http::StatusCode;

use crate::response::ResponseBody;

pub fn bad_request() -> ResponseBody {
    ResponseBody::new("CLT001", "errors.bad_request")
}

pub fn not_found() -> ResponseBody {
    ResponseBody::new("CLT002", "errors.not_found").with_status_code(StatusCode::NOT_FOUND)
}

pub fn unauthorized() -> ResponseBody {
    ResponseBody::new("AUT001", "errors.unauthorized").with_status_code(StatusCode::UNAUTHORIZED)
}

/// `field` is passed to the message template as `{{.field}}`.
pub fn field_required(field: impl Into<String>) -> ResponseBody {
    ResponseBody::new("VAL001", "validation.field.required").with_param("field", field.into())
}
