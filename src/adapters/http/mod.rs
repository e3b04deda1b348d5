//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full service: hotel endpoints behind the auth
//! middleware, an unauthenticated health probe, and the tower-http layers
//! for tracing, request ids, timeouts and CORS.

pub mod hotel;
pub mod middleware;

pub use hotel::{hotel_router, HotelAppState};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the application router.
pub fn app_router(state: HotelAppState, validator: AuthState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(hotel_router().with_state(state))
        .layer(axum::middleware::from_fn_with_state(validator, auth_middleware))
        // Registered after the auth layer so probes never need a token.
        .route("/health", get(health))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "OK!"
}

/// CORS for the configured origins; any origin when none (or `*`) are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
