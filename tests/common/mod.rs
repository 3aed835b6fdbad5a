#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use procure_backend::{
    AppState, FixedClock, InMemoryVendorStore, TokenConfig, TokenService, Vendor, VendorService,
};
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Application state backed by a simulated clock and an in-memory vendor
/// store.
pub fn test_state(clock: &FixedClock, vendors: Vec<Vendor>) -> AppState {
    let tokens = TokenService::new(TokenConfig::new(TEST_SECRET), Arc::new(clock.clone()))
        .expect("test secret is non-empty");
    let vendors = VendorService::new(Arc::new(InMemoryVendorStore::new(vendors)));
    AppState::new(tokens, vendors)
}

pub fn seed_vendors(count: i64) -> Vec<Vendor> {
    (1..=count)
        .map(|id| Vendor {
            id,
            name: format!("vendor-{id:03}"),
            contact_email: format!("vendor{id}@example.com"),
        })
        .collect()
}

/// Assert an error response status and that the `error` field of the JSON
/// body contains the expected fragment.
pub async fn assert_error_body<B>(
    resp: ServiceResponse<B>,
    expected_status: u16,
    expected_fragment: &str,
) where
    B: MessageBody,
    B::Error: std::fmt::Debug,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().expect("error field should be a string");
    assert!(
        message.contains(expected_fragment),
        "expected error message containing {expected_fragment:?}, got {message:?}"
    );
}
