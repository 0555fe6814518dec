/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use std::sync::Arc;
use usuarios_core::UserStore;
use usuarios_server::{create_router, AppState, ServerConfig, UserDirectory};
use usuarios_storage::MemoryUserStore;

/// Create a directory service over a fresh seeded store
pub fn create_test_directory() -> UserDirectory {
    let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::seeded());
    UserDirectory::new(store)
}

/// Create the full application router over a fresh seeded store
pub fn create_test_app() -> Router {
    create_test_app_with_config(&ServerConfig::default())
}

/// Create the full application router with a custom configuration
pub fn create_test_app_with_config(config: &ServerConfig) -> Router {
    let directory = Arc::new(create_test_directory());
    create_router(AppState::new(directory), config)
}

/// Build a request with an optional JSON body
pub fn json_request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Build a request with a raw body and content type
pub fn raw_request(method: &str, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as text
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Fixture names
pub mod fixtures {
    pub const NOT_FOUND: &str = "El usuario no se encuentra.";
    pub const TOO_SHORT: &str = "\"nombre\" length must be at least 3 characters long";
    pub const REQUIRED: &str = "\"nombre\" is required";
}
