//! Canonical host redirect for the origin.
//!
//! Requests whose original host differs from the configured base URL's host
//! are sent a 307 to the same path and query under the base URL.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use url::{Position, Url};

use crate::capture::original_host::OriginalHost;

/// Base URL the origin is canonically served from.
#[derive(Debug, Clone)]
pub struct CanonicalHost {
    base_url: Arc<Url>,
}

impl CanonicalHost {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: Arc::new(base_url),
        }
    }

    /// `host[:port]` of the base URL.
    pub fn authority(&self) -> &str {
        &self.base_url[Position::BeforeHost..Position::AfterPort]
    }

    /// Base URL joined with the request path, carrying the request query.
    pub fn redirect_target(&self, path: &str, query: Option<&str>) -> Url {
        let mut target = (*self.base_url).clone();
        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        target.set_path(&joined);
        target.set_query(query);
        target.set_fragment(None);
        target
    }
}

pub async fn canonical_host_middleware(
    State(canonical): State<CanonicalHost>,
    OriginalHost(host): OriginalHost,
    req: Request<Body>,
    next: Next,
) -> Response {
    if host == canonical.authority() {
        return next.run(req).await;
    }

    let target = canonical.redirect_target(req.uri().path(), req.uri().query());
    tracing::info!(
        host = %host,
        base_url = %canonical.base_url,
        new_url = %target,
        "Redirecting to canonical host"
    );
    Redirect::temporary(target.as_str()).into_response()
}
