pub mod auth_payload;

pub use auth_payload::AuthPayload;
