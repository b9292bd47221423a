//! Short-link resolution middleware.
//!
//! Runs ahead of routing for every inbound request. Paths that look like a
//! short code are resolved against the key-value store: a hit answers with a
//! 308 Permanent Redirect (caches may persist the mapping and the method is
//! preserved), a miss rewrites the request to the not-found view. Everything
//! else passes through untouched.
//!
//! The resolver sits in front of the whole site, so a store outage is
//! degraded to the not-found path instead of a 5xx: a broken short link
//! looks like "not found", never like a server crash.

use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, Uri, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Path the request is rewritten to when a code has no mapping.
const NOT_FOUND_PATH: &str = "/not-found";

/// Paths that name application routes, never short codes.
const EXCLUDED_PATHS: &[&str] = &["/", "/index", "/health", "/favicon.ico", NOT_FOUND_PATH];

/// Path prefixes reserved for the API and static assets.
const EXCLUDED_PREFIXES: &[&str] = &["/api/", "/static/"];

/// Routing decision for an inbound path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Not a short-code candidate; continue with normal routing.
    Passthrough,
    /// Look up this code in the store.
    Resolve(String),
}

/// Decides whether a request path is a short-code lookup candidate.
///
/// Excluded: the root path, reserved routes, API and static prefixes, paths
/// containing a literal `.` (static assets with a file extension), and paths
/// with more than one segment. Candidates are the remaining single-segment
/// paths, with the leading `/` stripped off.
pub fn decide(path: &str) -> RouteDecision {
    if EXCLUDED_PATHS.contains(&path) {
        return RouteDecision::Passthrough;
    }

    if EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix) || path == prefix.trim_end_matches('/'))
    {
        return RouteDecision::Passthrough;
    }

    let candidate = path.trim_start_matches('/');

    if candidate.is_empty() || candidate.contains('/') || candidate.contains('.') {
        return RouteDecision::Passthrough;
    }

    RouteDecision::Resolve(candidate.to_string())
}

/// Middleware intercepting every request ahead of routing.
///
/// Performs at most one store read per request and never writes.
pub async fn resolve_short_link(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let code = match decide(request.uri().path()) {
        RouteDecision::Passthrough => return next.run(request).await,
        RouteDecision::Resolve(code) => code,
    };

    match state.store.get(&code).await {
        Ok(Some(long_url)) if !long_url.is_empty() => {
            tracing::debug!(code, %long_url, "short link hit");

            match HeaderValue::from_str(&long_url) {
                Ok(location) => {
                    (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)])
                        .into_response()
                }
                Err(_) => {
                    tracing::warn!(code, "stored value is not a usable redirect target");
                    rewrite_to_not_found(request, next).await
                }
            }
        }
        Ok(_) => {
            tracing::debug!(code, "short link miss");
            rewrite_to_not_found(request, next).await
        }
        Err(e) => {
            tracing::warn!(code, error = %e, "store lookup failed, serving not-found");
            rewrite_to_not_found(request, next).await
        }
    }
}

/// Internally rewrites the request to the not-found view.
///
/// The view fills in the response status (404); the visitor's address bar
/// keeps the original path.
async fn rewrite_to_not_found(mut request: Request, next: Next) -> Response {
    *request.uri_mut() = Uri::from_static(NOT_FOUND_PATH);
    next.run(request).await
}
