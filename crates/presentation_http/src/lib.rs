//! Age Calculator API HTTP presentation layer
//!
//! This crate provides the HTTP API: routing, request extraction,
//! error mapping, and OpenAPI documentation.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::ApiJson;
pub use routes::create_router;
pub use state::AppState;
