//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/courses`, `/courses/{id}`   - Course CRUD
//! - `GET  /health`                - Health check: storage
//! - `GET  /docs/`                 - Swagger UI (when enabled; `/docs` redirects here)
//! - `GET  /api-docs/openapi.json` - OpenAPI document (when enabled)
//!
//! # Middleware
//!
//! - **Trailing slash** - `/courses/` is routed as `/courses`; docs paths are exempt
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API

use crate::api;
use crate::api::doc::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the application router with all routes and middleware.
///
/// Swagger UI serves its index at `/docs/` and redirects `/docs` there, so its
/// routes are matched before the API fallback, which trims trailing slashes.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `docs_enabled` - when `true`, serves Swagger UI and the OpenAPI document
pub fn app_router(state: AppState, docs_enabled: bool) -> Router {
    let api = Router::new()
        .merge(api::routes::course_routes())
        .route("/health", get(health_handler))
        .with_state(state);

    let mut router = Router::new();

    if docs_enabled {
        router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    }

    router
        .fallback_service(NormalizePathLayer::trim_trailing_slash().layer(api))
        .layer(cors::layer())
        .layer(tracing::layer())
}
