//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer accepting requests from any origin.
///
/// Browsers may call every endpoint with any method and headers. Credentials
/// are not allowed, as the service has no cookie-based session.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
