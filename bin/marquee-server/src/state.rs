//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use marquee_core::CatalogStore;

use crate::config::Config;

/// State shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// The movie catalog; the only owner of movie records. Any
    /// [`CatalogStore`] backend can be plugged in here.
    pub catalog: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(config: Config, catalog: impl CatalogStore) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
