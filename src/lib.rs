#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod pagination;
pub mod routes;
pub mod state;
pub mod vendors;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::clock::{Clock, FixedClock, SystemClock};
pub use auth::token::TokenService;
pub use error::AppError;
pub use extractors::auth_payload::AuthPayload;
pub use middleware::auth_gate::AuthGate;
pub use middleware::request_trace::RequestTrace;
pub use pagination::{PageArgs, PageMetadata, PageSpec};
pub use state::app_state::AppState;
pub use state::token_config::TokenConfig;
pub use vendors::{InMemoryVendorStore, Vendor, VendorService, VendorStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
