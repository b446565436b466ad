//! API error envelope
//!
//! Every failure surfaces to callers as JSON:
//!
//! ```json
//! {"error": {"code": "...", "message": "...", "details": [{"field": "...", "message": "..."}]}}
//! ```
//!
//! Validation failures (missing fields, unparsable timestamps, malformed
//! bodies) answer 422, matching the service's original contract.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::Error;

/// Error returned by API handlers; renders as the JSON envelope above.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Vec<FieldError>,
}

/// One field-level validation failure
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldError>,
}

impl ApiError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "unprocessable_input",
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal",
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Map a body-deserialization failure onto the validation surface.
    ///
    /// Data errors and syntactically broken JSON both answer 422; only
    /// `Content-Type` misuse keeps its protocol-level status.
    pub fn from_json_rejection(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let message = err.body_text();
                let field = missing_field_name(&message).unwrap_or("body").to_string();
                Error::invalid_event(field, message).into()
            }
            JsonRejection::JsonSyntaxError(err) => ApiError::unprocessable(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => Self {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                code: "unsupported_media_type",
                message: err.body_text(),
                details: Vec::new(),
            },
            other => Self {
                status: other.status(),
                code: "bad_request",
                message: other.body_text(),
                details: Vec::new(),
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidEvent { field, reason } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                code: "unprocessable_input",
                message: reason.clone(),
                details: vec![FieldError {
                    field,
                    message: reason,
                }],
            },
            Error::Classification(msg) => ApiError::internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

/// Serde reports absent required fields as ``missing field `name` ``; pull
/// the name out so the response can point at the offending field. Other data
/// errors (bad timestamps, wrong types) carry no field name.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.split("missing field `").nth(1)?;
    rest.split('`').next()
}
