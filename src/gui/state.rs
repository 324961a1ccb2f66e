use crate::core::api::{ApiConfig, BackendClient};
use crate::core::images::ImageResolver;

/// Shared per-application state: one backend client and the resolver derived
/// from its base origin. Both are cheap to clone into async tasks.
#[derive(Debug)]
pub struct AppState {
    pub client: BackendClient,
    pub resolver: ImageResolver,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            resolver: ImageResolver::from_config(&config),
            client: BackendClient::new(config),
        }
    }
}
