//! Origin-side resolution of the hostname the client asked for.
//!
//! Downstream services read `x-original-host` first, since `Host` may have
//! been rewritten for routing between the edge and the origin.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, StatusCode},
};

use crate::capture::header_map::X_ORIGINAL_HOST_HEADER;

/// Which header the resolved host came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSource {
    OriginalHost,
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHost<'a> {
    pub host: &'a str,
    pub source: HostSource,
}

/// Prefer a non-empty `x-original-host`, otherwise `Host`.
///
/// Values that are not visible ASCII are treated as absent.
pub fn resolve_original_host(headers: &HeaderMap) -> Option<ResolvedHost<'_>> {
    let original = headers
        .get(&X_ORIGINAL_HOST_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());

    if let Some(host) = original {
        return Some(ResolvedHost {
            host,
            source: HostSource::OriginalHost,
        });
    }

    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(|host| ResolvedHost {
            host,
            source: HostSource::Host,
        })
}

/// Extractor yielding the client's original hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalHost(pub String);

impl<S> FromRequestParts<S> for OriginalHost
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match resolve_original_host(&parts.headers) {
            Some(resolved) => {
                if resolved.source == HostSource::OriginalHost {
                    tracing::debug!(host = %resolved.host, "Using host from x-original-host");
                }
                Ok(OriginalHost(resolved.host.to_string()))
            }
            None => Err((StatusCode::BAD_REQUEST, "Missing Host header")),
        }
    }
}
