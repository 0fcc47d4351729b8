//! OpenAPI documentation module
//!
//! Provides OpenAPI 3.0 documentation for the age calculator HTTP API,
//! with Swagger UI and ReDoc for interactive exploration.

use axum::{Router, response::Html, routing::get};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for the age calculator API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Age Calculator API",
        version = "1.0.0",
        description = "Decomposes a date of birth into years, months, days, totals, and a next-birthday countdown",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "age", description = "Age calculation"),
        (name = "health", description = "Health check endpoint")
    ),
    paths(
        handlers::age::calculate_age,
        handlers::health::health_check,
    ),
    components(
        schemas(
            handlers::age::CalculateAgeRequest,
            handlers::age::AgeResponse,
            handlers::health::HealthResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/api-docs/openapi.json` - OpenAPI specification (used by Swagger UI)
/// - `/swagger-ui/*` - Swagger UI interactive documentation
/// - `/redoc` - ReDoc documentation
pub fn create_openapi_routes() -> Router<AppState> {
    let redoc = Redoc::with_url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/redoc", get(|| async move { Html(redoc.to_html()) }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_is_valid() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        assert!(json.contains("Age Calculator API"));
        assert!(json.contains("/api/calculate-age"));
        assert!(json.contains("/api/health"));
    }

    #[test]
    fn openapi_has_all_tags() {
        let doc = ApiDoc::openapi();
        let tags: Vec<&str> = doc
            .tags
            .as_ref()
            .map(|t| t.iter().map(|tag| tag.name.as_str()).collect())
            .unwrap_or_default();

        assert!(tags.contains(&"age"));
        assert!(tags.contains(&"health"));
    }

    #[test]
    fn openapi_exposes_error_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("AgeResponse"));
    }
}
