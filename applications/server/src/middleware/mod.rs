/// Request middleware
pub mod auth;
pub mod logger;

pub use auth::auth_middleware;
pub use logger::request_logger;
