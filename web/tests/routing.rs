//! Integration tests for routing, static files and the error boundary.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use common::{browser, spawn_app, spawn_with, test_config, test_state, xhr};
use meadowlark_core::mocks::InMemorySignupRepository;
use meadowlark_mail::mocks::MockEmailProvider;
use meadowlark_web::{build_router, Config, Environment};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_health_check_with_oneshot() {
    let email = MockEmailProvider::new();
    let signups = InMemorySignupRepository::new();
    let app = build_router(test_state(test_config(), &email, &signups));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_unknown_path_renders_not_found_page() {
    let app = spawn_app();

    let response = app.server.get("/no/such/page").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("404 - Not Found"));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_static_files_are_served() {
    let app = spawn_app();

    let response = app.server.get("/css/main.css").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains(".alert-success"));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_content_pages_render() {
    let app = spawn_app();

    for (path, heading) in [
        ("/", "Welcome to Meadowlark Travel"),
        ("/about", "About Meadowlark Travel"),
        ("/tours/hood-river", "Hood River Day Trip"),
        ("/tours/oregon-coast", "Oregon Coast Getaway"),
        ("/tours/request-group-rate", "Request Group Rate"),
        ("/thank-you", "Thank you"),
        ("/newsletter", "Sign up for our newsletter"),
        ("/nursery-rhyme", "/data/nursery-rhyme"),
    ] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{path}");
        assert!(response.text().contains(heading), "{path}");
    }
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_process_negotiates_reply() {
    let app = spawn_app();

    let (name, value) = xhr();
    let script = app.server.post("/process").add_header(name, value).await;
    assert_eq!(script.json::<Value>(), json!({ "success": true }));

    let (name, value) = browser();
    let page = app.server.post("/process").add_header(name, value).await;
    assert_eq!(page.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(page.header("location"), "/thank-you");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_nursery_rhyme_data() {
    let app = spawn_app();

    let response = app.server.get("/data/nursery-rhyme").await;

    assert_eq!(
        response.json::<Value>(),
        json!({
            "animal": "squirrel",
            "bodyPart": "tail",
            "adjective": "bushy",
            "noun": "heck",
        })
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_browser_tests_only_outside_production() {
    let app = spawn_app();
    let html = app.server.get("/").add_query_param("test", "1").await.text();
    assert!(html.contains("global-tests.js"));
    let script = app.server.get("/qa/global-tests.js").await;
    assert_eq!(script.status_code(), StatusCode::OK);
    assert!(script.text().contains("mocha"));

    let production = Config {
        environment: Environment::Production,
        secure_cookies: false,
        ..test_config()
    };
    let app = spawn_with(
        production,
        MockEmailProvider::new(),
        InMemorySignupRepository::new(),
    );
    let html = app.server.get("/").add_query_param("test", "1").await.text();
    assert!(!html.contains("global-tests.js"));
}
