//! HTTP routes: the connectivity-test endpoint plus static client assets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The analysis stage endpoints (`/api/analyze/*`) belong to external
//! services and are not served here; this process only backs the client's
//! Test page and hosts the built bundle.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Greeting returned by the connectivity-test endpoint.
pub const TEST_MESSAGE: &str = "Hello from the Food AI backend!";

/// Body of `GET /api/test`.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: String,
}

/// Connectivity-test endpoint backing the client's Test page.
pub async fn test_message() -> Json<TestResponse> {
    Json(TestResponse {
        message: TEST_MESSAGE.to_owned(),
    })
}

/// Build the application router.
///
/// CORS stays permissive for the split-origin dev setup where the client
/// bundle is served by its own dev server.
pub fn app() -> Router {
    let assets = ServeDir::new("client/dist").fallback(ServeFile::new("client/dist/index.html"));

    Router::new()
        .route("/api/test", get(test_message))
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
