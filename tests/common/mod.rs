#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use shortlink::prelude::{AppState, InMemoryLinkRepository, ManualClock, ShortLinkStore};
use shortlink::routes::router;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

/// Fixed starting instant for deterministic timestamps.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Builds an isolated state whose store reads time from the returned clock.
pub fn create_test_state() -> (AppState, ManualClock) {
    let clock = ManualClock::new(start_time());
    let store = ShortLinkStore::new(Arc::new(InMemoryLinkRepository::new()))
        .with_clock(Arc::new(clock.clone()));

    (AppState::new(Arc::new(store), BASE_URL), clock)
}

/// Serves the full router over an isolated state.
pub fn create_test_server() -> (TestServer, AppState, ManualClock) {
    let (state, clock) = create_test_state();
    let server = TestServer::new(router(state.clone())).unwrap();

    (server, state, clock)
}
