use jsonwebtoken::Algorithm;

/// Configuration for token signing and verification.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret key for signing and verifying tokens.
    pub secret: Vec<u8>,
    /// Signing algorithm, pinned to HS256.
    pub algorithm: Algorithm,
}

impl TokenConfig {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}
