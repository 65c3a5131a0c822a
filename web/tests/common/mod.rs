//! Shared setup for HTTP tests.

#![allow(dead_code, clippy::unwrap_used)]

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestServer, TestServerConfig};
use chrono::{DateTime, TimeZone, Utc};
use meadowlark_core::mocks::InMemorySignupRepository;
use meadowlark_core::{Clock, OrderNumber, OrderNumberGenerator};
use meadowlark_mail::mocks::MockEmailProvider;
use meadowlark_web::{build_router, AppState, Config};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Order number every test checkout receives.
pub const ORDER_NUMBER: &str = "1234567890";

/// A running app plus handles on its doubles.
pub struct TestApp {
    pub server: TestServer,
    pub email: MockEmailProvider,
    pub signups: InMemorySignupRepository,
}

struct FixedNumbers;

impl OrderNumberGenerator for FixedNumbers {
    fn next_order_number(&self) -> OrderNumber {
        OrderNumber::new(ORDER_NUMBER.to_string())
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 4, 12, 0, 0).unwrap()
    }
}

/// Development config serving the repository's `public/` directory.
pub fn test_config() -> Config {
    Config {
        public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"),
        ..Config::default()
    }
}

/// App with a working mail transport and signup store.
pub fn spawn_app() -> TestApp {
    spawn_with(test_config(), MockEmailProvider::new(), InMemorySignupRepository::new())
}

/// Build an app around `state`, returning a cookie-keeping client.
pub fn serve(state: AppState) -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(build_router(state), config).unwrap()
}

/// Default state wired to the given doubles.
pub fn test_state(
    config: Config,
    email: &MockEmailProvider,
    signups: &InMemorySignupRepository,
) -> AppState {
    AppState::new(config, Arc::new(email.clone()))
        .with_signups(Arc::new(signups.clone()))
        .with_clock(Arc::new(FixedClock))
        .with_order_numbers(Arc::new(FixedNumbers))
}

/// App with the given config and doubles.
pub fn spawn_with(
    config: Config,
    email: MockEmailProvider,
    signups: InMemorySignupRepository,
) -> TestApp {
    let server = serve(test_state(config, &email, &signups));
    TestApp {
        server,
        email,
        signups,
    }
}

/// `Accept` header a browser sends for a top-level navigation.
pub fn browser() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("accept"),
        HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
    )
}

/// Header that marks a script-driven request.
pub fn xhr() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    )
}

/// Wait until `provider` has finished `count` send attempts, or give up
/// after a second.
pub async fn wait_for_attempts(provider: &MockEmailProvider, count: usize) {
    for _ in 0..100 {
        if provider.attempts().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Wait until `provider` has delivered `count` messages, or give up after a
/// second.
pub async fn wait_for_delivery(provider: &MockEmailProvider, count: usize) {
    for _ in 0..100 {
        if provider.delivered().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
