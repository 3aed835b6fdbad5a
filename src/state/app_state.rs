use crate::auth::token::TokenService;
use crate::vendors::VendorService;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Token issuance and validation.
    pub tokens: TokenService,
    /// Vendor listing service.
    pub vendors: VendorService,
}

impl AppState {
    pub fn new(tokens: TokenService, vendors: VendorService) -> Self {
        Self { tokens, vendors }
    }
}
