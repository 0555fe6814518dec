/// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request's method and path, and the status it produced
pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    tracing::info!(%method, %path, "Logging...");

    let response = next.run(request).await;
    tracing::debug!(%method, %path, status = %response.status(), "Request finished");
    response
}
