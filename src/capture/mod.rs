//! Host capture: preserve the client-presented `Host` under `x-original-host`.
//!
//! # Data Flow
//! ```text
//! Runtime event
//!     → handle() picks event.request
//!     → capture_host() reads `host`, writes `x-original-host`
//!     → same request handed back to the runtime
//!
//! Live HTTP (header_map.rs):
//!     http::HeaderMap → same transform on real headers
//!
//! Origin side (original_host.rs):
//!     prefer `x-original-host`, fall back to `host`
//! ```
//!
//! # Design Decisions
//! - Pure function of its input; no state survives an invocation
//! - Missing host is a typed error, never a panic
//! - Existing `x-original-host` from an upstream hop is overwritten

pub mod header_map;
pub mod original_host;

use thiserror::Error;

use crate::edge::{Event, HeaderValueDescriptor, Request};

/// Header the client-presented hostname is read from.
pub const HOST: &str = "host";

/// Header the captured hostname is exposed under.
pub const X_ORIGINAL_HOST: &str = "x-original-host";

/// Failure of the host capture transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// No `Host` header, or its descriptor carries no string value.
    #[error("request has no usable Host header")]
    MissingHostHeader,
}

impl CaptureError {
    /// Stable identifier reported to the runtime.
    pub fn kind(&self) -> &'static str {
        match self {
            CaptureError::MissingHostHeader => "MissingHostHeader",
        }
    }
}

/// Copy the `Host` value into `x-original-host` on the same request.
///
/// The value is copied verbatim. On error the request is left untouched.
pub fn capture_host(request: &mut Request) -> Result<&mut Request, CaptureError> {
    let host = request
        .headers
        .get(HOST)
        .and_then(HeaderValueDescriptor::value)
        .ok_or(CaptureError::MissingHostHeader)?
        .to_owned();

    tracing::trace!(host = %host, "Capturing original host");

    request
        .headers
        .insert(X_ORIGINAL_HOST, HeaderValueDescriptor::new(host));
    Ok(request)
}

/// Runtime entry point: transform the request carried by `event`.
pub fn handle(event: &mut Event) -> Result<&mut Request, CaptureError> {
    capture_host(&mut event.request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Headers;
    use serde_json::json;

    fn request(headers: serde_json::Value) -> Request {
        serde_json::from_value(json!({ "headers": headers })).unwrap()
    }

    fn original_host(request: &Request) -> Option<&str> {
        request.headers.get(X_ORIGINAL_HOST).and_then(|d| d.value())
    }

    #[test]
    fn test_end_to_end_same_instance() {
        let mut event: Event = serde_json::from_value(json!({
            "request": { "headers": { "host": { "value": "example.com" } } }
        }))
        .unwrap();
        let expected: *const Request = &event.request;

        let returned = handle(&mut event).unwrap();
        assert!(std::ptr::eq(returned, expected));

        assert_eq!(
            serde_json::to_value(&event.request.headers).unwrap(),
            json!({
                "host": { "value": "example.com" },
                "x-original-host": { "value": "example.com" }
            })
        );
    }

    #[test]
    fn test_value_copied_verbatim() {
        let mut req = request(json!({ "Host": { "value": "  MiXeD.Example.COM:8443 " } }));
        capture_host(&mut req).unwrap();
        assert_eq!(original_host(&req), Some("  MiXeD.Example.COM:8443 "));
    }

    #[test]
    fn test_other_headers_untouched() {
        let mut req = request(json!({
            "host": { "value": "example.com" },
            "accept": { "value": "*/*", "multiValue": [{ "value": "*/*" }] },
            "user-agent": { "value": "curl/8.0" }
        }));
        let before = req.clone();

        capture_host(&mut req).unwrap();

        for (name, descriptor) in before.headers.iter() {
            assert_eq!(req.headers.get(name), Some(descriptor));
        }
        assert_eq!(req.headers.len(), before.headers.len() + 1);
        assert_eq!(req.attributes, before.attributes);
    }

    #[test]
    fn test_header_names_and_case_duplicates_survive() {
        let mut req = request(json!({
            "host": { "value": "example.com" },
            "User-Agent": { "value": "curl/8.0" },
            "X-Foo": { "value": "a" },
            "x-foo": { "value": "b" },
            "x-empty": { "value": null }
        }));

        capture_host(&mut req).unwrap();

        assert_eq!(
            serde_json::to_value(&req.headers).unwrap(),
            json!({
                "host": { "value": "example.com" },
                "User-Agent": { "value": "curl/8.0" },
                "X-Foo": { "value": "a" },
                "x-foo": { "value": "b" },
                "x-empty": { "value": null },
                "x-original-host": { "value": "example.com" }
            })
        );
    }

    #[test]
    fn test_mixed_case_forwarding_header_replaced() {
        let mut req = request(json!({
            "Host": { "value": "example.com" },
            "X-Original-Host": { "value": "upstream.example.net" }
        }));

        capture_host(&mut req).unwrap();

        assert_eq!(
            serde_json::to_value(&req.headers).unwrap(),
            json!({
                "Host": { "value": "example.com" },
                "x-original-host": { "value": "example.com" }
            })
        );
    }

    #[test]
    fn test_idempotent() {
        let mut once = request(json!({ "host": { "value": "example.com" } }));
        capture_host(&mut once).unwrap();

        let mut twice = once.clone();
        capture_host(&mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_overwrites_upstream_value() {
        let mut req = request(json!({
            "host": { "value": "edge.example.com" },
            "x-original-host": { "value": "spoofed.example.net" }
        }));
        capture_host(&mut req).unwrap();
        assert_eq!(original_host(&req), Some("edge.example.com"));
    }

    #[test]
    fn test_missing_host_leaves_request_unchanged() {
        let mut req = request(json!({ "accept": { "value": "*/*" } }));
        let before = req.clone();

        let err = capture_host(&mut req).unwrap_err();
        assert_eq!(err, CaptureError::MissingHostHeader);
        assert_eq!(err.kind(), "MissingHostHeader");
        assert_eq!(req, before);
    }

    #[test]
    fn test_host_descriptor_without_value() {
        let mut req = request(json!({ "host": { "multiValue": [] } }));
        assert_eq!(
            capture_host(&mut req).unwrap_err(),
            CaptureError::MissingHostHeader
        );
        assert!(!req.headers.contains(X_ORIGINAL_HOST));
    }

    #[test]
    fn test_empty_header_set() {
        let mut req = Request::with_headers(Headers::new());
        assert!(capture_host(&mut req).is_err());
        assert!(req.headers.is_empty());
    }
}
