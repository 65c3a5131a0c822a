//! Integration tests for newsletter signup.

mod common;

use axum::http::StatusCode;
use common::{browser, spawn_app, spawn_with, test_config, xhr};
use meadowlark_core::mocks::InMemorySignupRepository;
use meadowlark_mail::mocks::MockEmailProvider;
use serde_json::{json, Value};

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_script_client_gets_validation_error_and_nothing_is_saved() {
    let app = spawn_app();

    let response = app
        .server
        .post("/newsletter")
        .json(&json!({ "name": "Ann", "email": "not-an-email" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "error": "Invalid name email address." }));
    assert_eq!(app.signups.attempts(), 0);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_script_client_signup_succeeds() {
    let app = spawn_app();
    let (name, value) = xhr();

    let response = app
        .server
        .post("/newsletter")
        .add_header(name, value)
        .form(&[("name", "Ann"), ("email", "ann@example.com")])
        .await;

    assert_eq!(response.json::<Value>(), json!({ "success": true }));
    assert_eq!(app.signups.signups().len(), 1);
    assert_eq!(app.signups.signups()[0].email, "ann@example.com");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_browser_signup_flashes_once_after_redirect() {
    let app = spawn_app();

    // Step 1: submit the form
    let (name, value) = browser();
    let response = app
        .server
        .post("/newsletter")
        .add_header(name, value)
        .form(&[("name", "Ann"), ("email", "ann@example.com")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/newsletter/archive");

    // Step 2: the archive shows the flash
    let (name, value) = browser();
    let page = app.server.get("/newsletter/archive").add_header(name, value).await;
    assert_eq!(page.status_code(), StatusCode::OK);
    let html = page.text();
    assert!(html.contains("alert-success"));
    assert!(html.contains("You have now been signed up for the newsletter."));

    // Step 3: a reload does not
    let (name, value) = browser();
    let reload = app.server.get("/newsletter/archive").add_header(name, value).await;
    assert!(!reload.text().contains("You have now been signed up"));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_browser_invalid_email_flashes_validation_error() {
    let app = spawn_app();

    let (name, value) = browser();
    let response = app
        .server
        .post("/newsletter")
        .add_header(name, value)
        .form(&[("name", "Ann"), ("email", "ann")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let page = app.server.get("/newsletter/archive").await;
    let html = page.text();
    assert!(html.contains("alert-danger"));
    assert!(html.contains("Validation error!"));
    assert_eq!(app.signups.attempts(), 0);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_save_failure_is_reported_without_retry() {
    let app = spawn_with(
        test_config(),
        MockEmailProvider::new(),
        InMemorySignupRepository::failing(),
    );

    // Script client
    let response = app
        .server
        .post("/newsletter")
        .json(&json!({ "name": "Ann", "email": "ann@example.com" }))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "error": "Database error." }));
    assert_eq!(app.signups.attempts(), 1);

    // Browser
    let (name, value) = browser();
    let response = app
        .server
        .post("/newsletter")
        .add_header(name, value)
        .form(&[("name", "Ann"), ("email", "ann@example.com")])
        .await;
    assert_eq!(response.header("location"), "/newsletter/archive");
    assert_eq!(app.signups.attempts(), 2);

    let html = app.server.get("/newsletter/archive").await.text();
    assert!(html.contains("There was a database error; please try again later."));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_script_client_without_body_gets_validation_error() {
    let app = spawn_app();
    let (name, value) = xhr();

    let response = app.server.post("/newsletter").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "error": "Invalid name email address." }));
    assert_eq!(app.signups.attempts(), 0);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_browser_plain_text_body_redirects_with_validation_error() {
    let app = spawn_app();

    let (name, value) = browser();
    let response = app
        .server
        .post("/newsletter")
        .add_header(name, value)
        .text("email=ann@example.com")
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/newsletter/archive");
    let html = app.server.get("/newsletter/archive").await.text();
    assert!(html.contains("Validation error!"));
    assert_eq!(app.signups.attempts(), 0);
}
