//! Integration tests for health, discovery and fallback routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use rw_api::create_app;

#[actix_web::test]
async fn test_health_check() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["store"]["status"], "healthy");
}

#[actix_web::test]
async fn test_api_info() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["base_url"], "https://api.rewear.test");
    assert!(body["endpoints"]["swaps"].is_string());
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn test_security_headers_present() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(resp.headers().get("x-frame-options").unwrap(), "DENY");
}
