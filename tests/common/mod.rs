#![allow(dead_code)]

use axum_test::TestServer;
use expiring_shortener::domain::clock::FixedClock;
use expiring_shortener::domain::entities::Mapping;
use expiring_shortener::domain::repositories::MappingStore;
use expiring_shortener::infrastructure::persistence::InMemoryStore;
use expiring_shortener::routes::router;
use expiring_shortener::state::AppState;
use expiring_shortener::utils::request_context::ContextSettings;
use std::sync::Arc;

/// Fixed "now" used by handler tests.
pub const T: i64 = 1_700_000_000;

pub const HOST: &str = "links.example.com";

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<FixedClock>,
}

pub fn create_test_state(settings: ContextSettings) -> (AppState, Arc<InMemoryStore>, Arc<FixedClock>) {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(FixedClock::new(T));

    let state = AppState::new(store.clone(), clock.clone(), settings);

    (state, store, clock)
}

pub fn spawn_app_with(settings: ContextSettings) -> TestApp {
    let (state, store, clock) = create_test_state(settings);
    let server = TestServer::new(router(state)).unwrap();

    TestApp {
        server,
        store,
        clock,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(ContextSettings::default())
}

pub async fn insert_mapping(store: &InMemoryStore, suffix: &str, url: &str, expiry: i64) {
    store
        .put(Mapping {
            suffix: suffix.to_string(),
            long_url: url.to_string(),
            expiry,
        })
        .await
        .unwrap();
}
