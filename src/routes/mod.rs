use actix_web::web;

pub mod auth;
pub mod health;
pub mod private;
pub mod vendors;

/// Public routes: health and token issuance. Protected routes are wired
/// under scopes wrapped with the auth gate; see [`protected`] and
/// `main.rs`.
pub fn public(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.configure(auth::configure_routes);
}

/// Routes that require a verified identity, registered relative to a
/// scope wrapped with `AuthGate`.
pub fn protected(cfg: &mut web::ServiceConfig) {
    cfg.configure(private::configure_routes);
    cfg.configure(vendors::configure_routes);
}
