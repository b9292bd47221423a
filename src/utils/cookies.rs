//! Recent-links cookie handling.
//!
//! Each browser that creates short links accumulates the codes it created in
//! a `links` cookie (a JSON array of codes). This is a client-side
//! convenience for a "recent links" list only; the key-value store remains
//! the sole authority on which mappings exist.

use axum::http::{HeaderMap, HeaderValue, header};

/// Name of the cookie holding the caller's created codes.
pub const LINKS_COOKIE: &str = "links";

/// Reads the list of codes previously created by this browser.
///
/// Handles multiple cookies in the `Cookie` header by splitting on `;` and
/// matching the cookie name exactly. A missing or unparseable cookie yields
/// an empty list.
pub fn recent_links(headers: &HeaderMap) -> Vec<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(name), Some(value)) if name == LINKS_COOKIE => Some(value.to_string()),
                    _ => None,
                }
            })
        })
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Builds a `Set-Cookie` value appending `code` to the caller's list.
///
/// Returns `None` if the resulting cookie cannot be encoded as a header
/// value; the caller treats that as "no cookie", never as a request failure.
pub fn append_recent_link(request_headers: &HeaderMap, code: &str) -> Option<HeaderValue> {
    let mut codes = recent_links(request_headers);
    codes.push(code.to_string());

    let value = serde_json::to_string(&codes).ok()?;
    HeaderValue::from_str(&format!("{LINKS_COOKIE}={value}; Path=/; SameSite=Lax")).ok()
}
