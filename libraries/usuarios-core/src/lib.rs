//! Usuarios Core
//!
//! Domain types, traits, and error handling for the user directory.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, `CreateUser`, `UpdateUser`
//! - **Core Traits**: `UserStore`
//! - **Validation**: the shared `nombre` rule used by create and update
//! - **Error Handling**: Unified `DirectoryError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use usuarios_core::types::{User, UserId};
//! use usuarios_core::validation::validate_name;
//! use serde_json::json;
//!
//! let nombre = json!("Eva");
//! let name = validate_name(Some(&nombre)).unwrap();
//! let user = User::new(UserId::new(5), name);
//!
//! assert_eq!(UserId::parse_path("5"), Some(user.id));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error type shared by every directory operation
pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{DirectoryError, Result};
pub use storage::UserStore;
pub use types::{CreateUser, UpdateUser, User, UserId};
