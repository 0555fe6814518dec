/// API route modules
pub mod health;
pub mod root;
pub mod usuarios;
