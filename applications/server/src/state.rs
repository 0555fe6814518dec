/// Shared application state
use crate::services::UserDirectory;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }
}
