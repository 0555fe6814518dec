//! Usuarios Storage
//!
//! In-memory storage for the user directory.
//!
//! Records live for the lifetime of the process only. Each store instance
//! owns its own collection, so tests and servers never share state unless
//! they share the same `Arc`.
//!
//! # Example
//!
//! ```rust
//! use usuarios_core::{CreateUser, UserStore};
//! use usuarios_storage::MemoryUserStore;
//!
//! # async fn example() -> usuarios_core::Result<()> {
//! let store = MemoryUserStore::seeded();
//! let eva = store.create(CreateUser { name: "Eva".to_string() }).await?;
//! assert_eq!(eva.id.get(), 5);
//! # Ok(())
//! # }
//! ```

mod memory;
pub mod seed;

pub use memory::MemoryUserStore;
