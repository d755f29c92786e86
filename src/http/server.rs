//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, timeout)
//! - Expose the runtime invocation endpoint
//! - Run the live host capture path with an echo origin
//! - Redirect the echo origin to its canonical host when configured
//! - Shut down gracefully on signal

use std::collections::BTreeMap;
use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::capture::{self, HOST};
use crate::config::EdgeConfig;
use crate::edge::Event;
use crate::http::middleware::{canonical_host_middleware, host_capture_middleware, CanonicalHost};
use crate::http::request::{make_span, request_id};
use crate::http::response::capture_error_response;
use crate::lifecycle::shutdown::wait as wait_for_shutdown;

/// Local stand-in for the edge runtime.
pub struct EdgeServer {
    router: Router,
    config: EdgeConfig,
}

impl EdgeServer {
    pub fn new(config: EdgeConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EdgeConfig) -> Router {
        let mut live = Router::new().fallback(echo_handler);
        if let Some(base_url) = &config.origin.base_url {
            live = live.layer(middleware::from_fn_with_state(
                CanonicalHost::new(base_url.clone()),
                canonical_host_middleware,
            ));
        }
        let live = live.layer(middleware::from_fn(host_capture_middleware));

        Router::new()
            .route("/invoke", post(invoke_handler))
            .route("/healthz", get(health_handler))
            .fallback_service(live)
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(make_span::<Body>))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_url = ?self.config.origin.base_url.as_ref().map(|u| u.as_str()),
            "Edge runtime host listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("Edge runtime host stopped");
        Ok(())
    }
}

/// Run the host capture function on a runtime event.
async fn invoke_handler(headers: HeaderMap, Json(mut event): Json<Event>) -> Response {
    let request_id = request_id(&headers);

    match capture::handle(&mut event).map(|_| ()) {
        Ok(()) => {
            tracing::debug!(
                request_id = %request_id,
                host = event.request.headers.get(HOST).and_then(|d| d.value()).unwrap_or_default(),
                "Captured original host"
            );
            Json(event.request).into_response()
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Edge function failed");
            capture_error_response(StatusCode::UNPROCESSABLE_ENTITY, &e)
        }
    }
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Headers as the origin would receive them.
#[derive(Debug, Serialize)]
struct EchoBody {
    headers: BTreeMap<String, String>,
}

/// Stand-in origin: reflects the forwarded headers.
async fn echo_handler(headers: HeaderMap) -> Json<EchoBody> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    Json(EchoBody { headers })
}
