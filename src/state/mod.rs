pub mod app_state;
pub mod token_config;

pub use app_state::AppState;
pub use token_config::TokenConfig;
