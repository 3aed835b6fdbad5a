mod common;
use std::time::Duration;

use actix_web::{test, web, App};
use common::{assert_error_body, seed_vendors, test_state};
use procure_backend::{routes, AuthGate, FixedClock, RequestTrace, TokenConfig, TokenService};
use serde_json::Value;
use std::sync::Arc;

const EPOCH: u64 = 1_700_000_000;

macro_rules! gate_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(web::Data::new($state))
                .configure(routes::public)
                .service(
                    web::scope("/api")
                        .wrap(AuthGate)
                        .configure(routes::protected),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn missing_authorization_header_rejected() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let app = gate_app!(test_state(&clock, Vec::new()));

    let req = test::TestRequest::get().uri("/api/private/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 400, "authorization header not provided").await;
}

#[actix_web::test]
async fn malformed_authorization_header_rejected() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let app = gate_app!(test_state(&clock, Vec::new()));

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header(("Authorization", "Bearer"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 400, "authorization header not valid").await;
}

#[actix_web::test]
async fn non_bearer_scheme_rejected() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let app = gate_app!(test_state(&clock, Vec::new()));

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header(("Authorization", "Basic xyz"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 400, "authorization type not valid").await;
}

#[actix_web::test]
async fn lowercase_scheme_rejected() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let state = test_state(&clock, Vec::new());
    let token = state.tokens.issue("buyer-7").unwrap();
    let app = gate_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header(("Authorization", format!("bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 400, "authorization type not valid").await;
}

#[actix_web::test]
async fn valid_token_reaches_handler_with_identity() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let state = test_state(&clock, Vec::new());
    let token = state.tokens.issue("buyer-7").unwrap();
    let app = gate_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], "buyer-7");
}

#[actix_web::test]
async fn expired_token_rejected_and_identity_not_attached() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let state = test_state(&clock, Vec::new());
    let token = state.tokens.issue("buyer-7").unwrap();

    // 31 days past issuance.
    clock.advance(Duration::from_secs(31 * 24 * 60 * 60));
    let app = gate_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // The handler echoing the identity is never reached.
    assert_error_body(resp, 401, "token has expired").await;
}

#[actix_web::test]
async fn token_signed_with_other_secret_rejected() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let state = test_state(&clock, Vec::new());

    let rogue = TokenService::new(
        TokenConfig::new(b"a-completely-different-secret".to_vec()),
        Arc::new(clock.clone()),
    )
    .unwrap();
    let token = rogue.issue("buyer-7").unwrap();
    let app = gate_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 401, "token signature invalid").await;
}

#[actix_web::test]
async fn garbage_token_rejected() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let app = gate_app!(test_state(&clock, Vec::new()));

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 401, "token is malformed").await;
}

#[actix_web::test]
async fn unprotected_routes_skip_the_gate() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let app = gate_app!(test_state(&clock, seed_vendors(2)));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn responses_carry_request_id() {
    let clock = FixedClock::at_epoch_secs(EPOCH);
    let app = gate_app!(test_state(&clock, Vec::new()));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("x-request-id"));
}
