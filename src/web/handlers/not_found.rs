//! Not-found view handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Template for the not-found page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

/// Renders the not-found view with status 404.
///
/// # Endpoint
///
/// `GET /not-found`, and the internal rewrite target for short-code misses.
/// Also installed as the router fallback for paths the resolver passes
/// through that match no route.
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate {})
}
