/// Authentication middleware
use axum::{extract::Request, middleware::Next, response::Response};

/// Placeholder authentication step.
///
/// Every request is let through unchanged; the log line marks where a real
/// credential check would run.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    tracing::info!("Autenticando...");
    next.run(request).await
}
