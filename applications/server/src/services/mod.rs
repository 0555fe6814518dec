/// Server services
pub mod directory;

pub use directory::UserDirectory;
