use crate::config::Config;
use crate::layout::{ApiOrigin, PageConfig};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry every render is sized to. A4 at 96 DPI.
    pub page: PageConfig,
    /// Origin photo upload paths are rewritten onto.
    pub origin: ApiOrigin,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            origin: ApiOrigin::new(&config.api_base_url),
            page: PageConfig::a4(),
            config,
        }
    }
}
