use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use procure_backend::middleware::auth_gate::AuthGate;
use procure_backend::middleware::request_trace::RequestTrace;
use procure_backend::routes;
use procure_backend::state::app_state::AppState;
use procure_backend::state::token_config::TokenConfig;
use procure_backend::vendors::{InMemoryVendorStore, VendorService};
use procure_backend::{SystemClock, TokenService};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let host = std::env::var("PROCURE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PROCURE_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("PROCURE_PORT must be a valid port number");
            std::process::exit(1);
        });

    let secret = match std::env::var("PROCURE_TOKEN_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            eprintln!("PROCURE_TOKEN_SECRET must be set");
            std::process::exit(1);
        }
    };

    let tokens = match TokenService::new(TokenConfig::new(secret.as_bytes()), Arc::new(SystemClock))
    {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Failed to build token service: {e}");
            std::process::exit(1);
        }
    };

    // The relational accessor is wired here; the in-memory store is the
    // stand-in backing for the listing seam.
    let vendors = VendorService::new(Arc::new(InMemoryVendorStore::default()));

    let data = web::Data::new(AppState::new(tokens, vendors));

    tracing::info!(%host, port, "starting procurement backend");

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::public)
            .service(
                web::scope("/api")
                    .wrap(AuthGate)
                    .configure(routes::protected),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
