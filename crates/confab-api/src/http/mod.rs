//! HTTP/REST API layer for Confab.
//!
//! Axum-based REST API at `/api/v1/` with proxy-forwarded identity,
//! envelope response format, and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
