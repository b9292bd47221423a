//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Home page with the submission form
//! - `GET  /{code}`      - Short link redirect (handled by the resolver layer)
//! - `GET  /not-found`   - Not-found view (rewrite target for misses)
//! - `GET  /health`      - Health check reporting store reachability
//! - `POST /api/shorten` - Create a short link
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Resolver** - short-link interception ahead of routing; installed after
//!   the fallback so unmatched candidate paths flow through it too
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{shorten_handler, shorten_method_fallback};
use crate::resolver::resolve_short_link;
use crate::state::AppState;
use crate::web::handlers::{health_handler, home_handler, not_found_handler};

/// Constructs the application router with all routes and the resolver layer.
///
/// Kept separate from [`app_router`] so tests can drive it directly with
/// `axum_test::TestServer`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/not-found", get(not_found_handler))
        .route("/health", get(health_handler))
        .route(
            "/api/shorten",
            post(shorten_handler).fallback(shorten_method_fallback),
        )
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_short_link,
        ))
        .with_state(state)
        .layer(trace_layer())
}

/// Wraps the router with trailing-slash normalization for serving.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Creates the tracing middleware for HTTP requests.
///
/// Spans at `INFO` level carry method, path, and HTTP version; responses log
/// status and latency in milliseconds.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
