//! Server-rendered pages: home form, not-found view, health endpoint.

pub mod handlers;
