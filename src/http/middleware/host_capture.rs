//! Host capture middleware.
//! Applies the capture transform to live HTTP requests before they move on.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::capture::header_map::capture_host_header;
use crate::http::request::request_id;
use crate::http::response::capture_error_response;

pub async fn host_capture_middleware(mut req: Request<Body>, next: Next) -> Response {
    if let Err(e) = capture_host_header(req.headers_mut()) {
        tracing::warn!(
            request_id = %request_id(req.headers()),
            path = %req.uri().path(),
            error = %e,
            "Rejecting request without Host"
        );
        return capture_error_response(StatusCode::BAD_REQUEST, &e);
    }

    next.run(req).await
}
