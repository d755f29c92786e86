//! Event envelope and request handed to edge functions by the runtime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::edge::headers::Headers;

/// Envelope the runtime creates for each inbound HTTP request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub request: Request,

    /// Envelope fields not interpreted here (version, context, viewer, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(request: Request) -> Self {
        Self {
            request,
            extra: Map::new(),
        }
    }
}

/// Inbound HTTP request as seen by an edge function.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Request {
    #[serde(default)]
    pub headers: Headers,

    /// Method, uri, querystring, cookies and anything else the platform sends.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Request {
    pub fn with_headers(headers: Headers) -> Self {
        Self {
            headers,
            attributes: Map::new(),
        }
    }
}
