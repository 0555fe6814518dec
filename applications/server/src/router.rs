/// HTTP routing
use crate::{api, config::ServerConfig, error::ServerError, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router.
///
/// Layers, outermost first: panic catcher, request tracing (development
/// only), request logger, authentication stub.
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let api_routes: Router<AppState> = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/usuarios",
            get(api::usuarios::list_users).post(api::usuarios::create_user),
        )
        .route(
            "/usuarios/:id",
            get(api::usuarios::get_user)
                .put(api::usuarios::update_user)
                .delete(api::usuarios::delete_user),
        );

    let mut app: Router<AppState> = Router::new()
        .route("/", get(api::root::index))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.server.public_dir))
        .layer(axum_middleware::from_fn(middleware::auth_middleware))
        .layer(axum_middleware::from_fn(middleware::request_logger));

    if config.environment.is_development() {
        app = app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        );
    }

    app.layer(CatchPanicLayer::custom(panic_response))
        .with_state(app_state)
}

/// Turn a handler panic into a plain-text 500
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    ServerError::Internal(format!("handler panicked: {detail}")).into_response()
}
