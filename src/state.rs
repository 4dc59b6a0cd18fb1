use crate::api::ApiClient;
use crate::cache::DropdownCache;
use crate::config::{Config, DashboardMode};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub dropdowns: Arc<DropdownCache>,
    pub dashboard_mode: DashboardMode,
}

impl AppState {
    pub fn new(api: ApiClient, dashboard_mode: DashboardMode) -> Self {
        Self {
            api,
            dropdowns: Arc::new(DropdownCache::default()),
            dashboard_mode,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ApiClient::new(&config.api_base_url), config.dashboard_mode)
    }
}
