//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::ContactService;
use crate::config::Config;
use crate::infrastructure::memory::InMemoryContactRepository;

/// State injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService<InMemoryContactRepository>>,
    /// How long the slow search waits before answering.
    pub search_delay: Duration,
}

impl AppState {
    pub fn new(
        contact_service: Arc<ContactService<InMemoryContactRepository>>,
        search_delay: Duration,
    ) -> Self {
        Self {
            contact_service,
            search_delay,
        }
    }

    /// State with a freshly seeded contact store.
    pub fn from_config(config: &Config) -> Self {
        let repository = Arc::new(InMemoryContactRepository::seeded());
        Self::new(
            Arc::new(ContactService::new(repository)),
            config.search_delay(),
        )
    }
}
