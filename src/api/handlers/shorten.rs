//! Handler for the link creation endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::generate_code;
use crate::utils::cookies::append_recent_link;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "https://s.example.com/Ab3x9", "id": "Ab3x9" }
/// ```
///
/// On success the response also appends the new code to the caller's `links`
/// cookie, feeding the browser's own "recent links" list.
///
/// # Errors
///
/// Returns 400 `Bad request` for unparseable JSON, an invalid URL, or a
/// failed store write. The write is the last step, so a failed request
/// leaves no state behind.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // The body is parsed by hand so a malformed payload surfaces as the
    // generic 400 instead of an extractor-specific rejection.
    let payload: ShortenRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("malformed JSON body: {e}")))?;

    payload
        .validate()
        .map_err(|e| AppError::bad_request(format!("invalid URL: {e}")))?;

    let code = generate_code();
    state.store.set(&code, &payload.url).await?;

    tracing::info!(code, url = %payload.url, "short link created");

    let body = ShortenResponse {
        url: state.short_url(&code),
        id: code.clone(),
    };

    let mut response = Json(body).into_response();
    if let Some(cookie) = append_recent_link(&headers, &code) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }

    Ok(response)
}

/// Fallback for non-POST methods on the creation endpoint.
///
/// The endpoint answers 404 `Not found` rather than 405 for any other method.
pub async fn shorten_method_fallback() -> AppError {
    AppError::not_found("creation endpoint only accepts POST")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::{MockKeyValueStore, StoreError};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn state_with(store: MockKeyValueStore) -> AppState {
        AppState::new(Arc::new(store), "https://s.test")
    }

    #[tokio::test]
    async fn test_valid_url_is_written_once() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .withf(|_code, value| value == "https://example.com/page")
            .times(1)
            .returning(|_, _| Ok(()));

        let response = shorten_handler(
            State(state_with(store)),
            HeaderMap::new(),
            Bytes::from(r#"{"url":"https://example.com/page"}"#),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_url_never_touches_store() {
        let mut store = MockKeyValueStore::new();
        store.expect_set().times(0);

        let result = shorten_handler(
            State(state_with(store)),
            HeaderMap::new(),
            Bytes::from(r#"{"url":"not-a-url"}"#),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_malformed_json_never_touches_store() {
        let mut store = MockKeyValueStore::new();
        store.expect_set().times(0);

        let result = shorten_handler(
            State(state_with(store)),
            HeaderMap::new(),
            Bytes::from("{not json"),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_store_write_failure_surfaces_as_error() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .returning(|_, _| Err(StoreError::Operation("connection refused".into())));

        let result = shorten_handler(
            State(state_with(store)),
            HeaderMap::new(),
            Bytes::from(r#"{"url":"https://example.com"}"#),
        )
        .await;

        assert!(matches!(result, Err(AppError::Store(_))));
    }
}
