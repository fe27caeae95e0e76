#![allow(dead_code)]

use axum_test::TestServer;
use htmx_demos::application::services::ContactService;
use htmx_demos::infrastructure::memory::InMemoryContactRepository;
use htmx_demos::routes::router;
use htmx_demos::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub fn create_test_state(search_delay: Duration) -> AppState {
    let repository = Arc::new(InMemoryContactRepository::seeded());
    AppState::new(Arc::new(ContactService::new(repository)), search_delay)
}

/// Full router over a fresh contact store, without search delay.
pub fn make_server() -> TestServer {
    make_server_with_delay(Duration::ZERO)
}

pub fn make_server_with_delay(search_delay: Duration) -> TestServer {
    let app = router(create_test_state(search_delay), "static");
    TestServer::new(app).unwrap()
}
