//! REST API: DTOs and handlers for the creation endpoint.

pub mod dto;
pub mod handlers;
