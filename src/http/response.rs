//! Mapping of capture failures to HTTP responses.
//!
//! Error bodies use the shape edge runtimes report function failures in:
//! `{"errorType": "...", "errorMessage": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::capture::CaptureError;

/// JSON body describing a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_type: String,
    pub error_message: String,
}

impl From<&CaptureError> for ErrorBody {
    fn from(err: &CaptureError) -> Self {
        Self {
            error_type: err.kind().to_string(),
            error_message: err.to_string(),
        }
    }
}

/// Build an error response with the given status.
pub fn capture_error_response(status: StatusCode, err: &CaptureError) -> Response {
    (status, Json(ErrorBody::from(err))).into_response()
}
