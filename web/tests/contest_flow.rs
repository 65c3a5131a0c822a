//! Integration tests for the vacation photo contest.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{spawn_app, spawn_with, test_config};
use meadowlark_core::mocks::InMemorySignupRepository;
use meadowlark_mail::mocks::MockEmailProvider;
use meadowlark_web::Config;

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_form_posts_to_current_year_and_month() {
    let app = spawn_app();

    let html = app.server.get("/contest/vacation-photo").await.text();

    assert!(html.contains(r#"action="/contest/vacation-photo/2026/7""#));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_valid_entry_redirects_to_thank_you() {
    let app = spawn_app();
    let form = MultipartForm::new()
        .add_text("name", "Ann")
        .add_text("email", "ann@example.com")
        .add_part(
            "photo",
            Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
                .file_name("beach.jpg")
                .mime_type("image/jpeg"),
        );

    let response = app.server.post("/contest/vacation-photo/2026/7").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/thank-you");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_non_multipart_body_redirects_to_error() {
    let app = spawn_app();

    let response = app
        .server
        .post("/contest/vacation-photo/2026/7")
        .form(&[("name", "Ann")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/error");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_oversized_upload_redirects_to_error() {
    let config = Config {
        max_upload_bytes: 1024,
        ..test_config()
    };
    let app = spawn_with(config, MockEmailProvider::new(), InMemorySignupRepository::new());
    let form = MultipartForm::new().add_part(
        "photo",
        Part::bytes(vec![0_u8; 64 * 1024])
            .file_name("huge.jpg")
            .mime_type("image/jpeg"),
    );

    let response = app.server.post("/contest/vacation-photo/2026/7").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/error");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_error_page_is_served_with_ok() {
    let app = spawn_app();

    let response = app.server.get("/error").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Something went wrong"));
}
