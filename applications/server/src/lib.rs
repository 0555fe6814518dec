//! Usuarios Server Library
//!
//! HTTP CRUD service for an in-memory user directory.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{Environment, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::UserDirectory;
pub use state::AppState;
