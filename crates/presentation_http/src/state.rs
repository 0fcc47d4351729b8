//! Application state shared across handlers

use std::sync::Arc;

use application::AgeService;
use infrastructure::AppConfig;

/// Shared application state
///
/// Built once at startup and cloned per request; everything inside is
/// immutable, so concurrent requests never coordinate.
#[derive(Clone)]
pub struct AppState {
    /// Age calculation service
    pub age_service: Arc<AgeService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
