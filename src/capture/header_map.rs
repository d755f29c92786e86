//! Host capture applied to a live `http::HeaderMap`.
//!
//! Same contract as [`capture_host`](super::capture_host), for requests that
//! arrive as real HTTP rather than as a runtime event.

use axum::http::{header, HeaderMap, HeaderName};

use crate::capture::{CaptureError, X_ORIGINAL_HOST};

/// `x-original-host` as a typed header name.
pub static X_ORIGINAL_HOST_HEADER: HeaderName = HeaderName::from_static(X_ORIGINAL_HOST);

/// Copy the first `Host` value into `x-original-host`, replacing any existing values.
pub fn capture_host_header(headers: &mut HeaderMap) -> Result<(), CaptureError> {
    let host = headers
        .get(header::HOST)
        .cloned()
        .ok_or(CaptureError::MissingHostHeader)?;

    headers.insert(X_ORIGINAL_HOST_HEADER.clone(), host);
    Ok(())
}
