//! Integration tests for the newsletter subscription endpoint

mod common;

use actix_web::{http::StatusCode, test};
use futures_util::future::join_all;
use serde_json::{json, Value};

use rw_api::create_app;

#[actix_web::test]
async fn test_subscribe_new_email() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/subscribe")
        .set_json(json!({ "email": "Jane@Example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert!(!body["message"].as_str().unwrap().is_empty());

    let stored = ctx
        .repos
        .subscribers
        .find_by_email("jane@example.com")
        .await
        .unwrap();
    assert!(stored.is_some());
    assert_eq!(ctx.repos.subscribers.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_subscribe_duplicate_email() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for expected in [StatusCode::CREATED, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/subscribe")
            .set_json(json!({ "email": "jane@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);

        if expected == StatusCode::BAD_REQUEST {
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "duplicate_email");
            assert!(body["message"].is_string());
        }
    }

    assert_eq!(ctx.repos.subscribers.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_subscribe_missing_or_blank_email() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for payload in [json!({}), json!({ "email": "" }), json!({ "email": "   " })] {
        let req = test::TestRequest::post()
            .uri("/subscribe")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "required_field");
    }

    assert_eq!(ctx.repos.subscribers.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_subscribe_invalid_email() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/subscribe")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_email");
    assert_eq!(ctx.repos.subscribers.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_subscribe_malformed_body() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/subscribe")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\":")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
}

#[actix_web::test]
async fn test_concurrent_duplicate_subscriptions_store_one_record() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let requests = (0..16).map(|_| {
        let req = test::TestRequest::post()
            .uri("/api/subscribe")
            .set_json(json!({ "email": "race@example.com" }))
            .to_request();
        test::call_service(&app, req)
    });
    let responses = join_all(requests).await;

    let created = responses
        .iter()
        .filter(|r| r.status() == StatusCode::CREATED)
        .count();
    let rejected = responses
        .iter()
        .filter(|r| r.status() == StatusCode::BAD_REQUEST)
        .count();

    assert_eq!(created, 1);
    assert_eq!(rejected, 15);
    assert_eq!(ctx.repos.subscribers.count().await.unwrap(), 1);
}
