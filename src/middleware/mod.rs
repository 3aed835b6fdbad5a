pub mod auth_gate;
pub mod request_trace;

pub use auth_gate::AuthGate;
pub use request_trace::RequestTrace;
