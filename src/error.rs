use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("authorization header not provided")]
    AuthHeaderMissing,
    #[error("authorization header not valid")]
    AuthHeaderMalformed,
    #[error("authorization type not valid")]
    AuthSchemeInvalid,
    #[error("token is malformed")]
    TokenMalformed,
    #[error("token algorithm not allowed")]
    TokenAlgorithmMismatch,
    #[error("token signature invalid")]
    TokenSignatureInvalid,
    #[error("token has expired")]
    TokenExpired,
    #[error("authentication required")]
    Unauthorized,
    #[error("{detail}")]
    BadRequest { detail: String },
    #[error("configuration error: {detail}")]
    Config { detail: String },
    #[error("internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AuthHeaderMissing
            | AppError::AuthHeaderMalformed
            | AppError::AuthSchemeInvalid
            | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::TokenMalformed
            | AppError::TokenAlgorithmMismatch
            | AppError::TokenSignatureInvalid
            | AppError::TokenExpired
            | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for any of the token-validation failures. Externally they all
    /// surface as the same unauthorized outcome; the variant itself is the
    /// internal classification used for logging.
    pub fn is_token_fault(&self) -> bool {
        matches!(
            self,
            AppError::TokenMalformed
                | AppError::TokenAlgorithmMismatch
                | AppError::TokenSignatureInvalid
                | AppError::TokenExpired
        )
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
