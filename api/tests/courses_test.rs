//! Integration tests for the admin course analytics endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use rw_api::create_app;

fn titles(body: &Value) -> Vec<String> {
    body["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_courses_require_admin() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let (_, member_token) = ctx.user("Member", "member@example.com").await;

    let req = test::TestRequest::get().uri("/api/courses").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/courses")
        .insert_header(common::bearer(&member_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "forbidden");

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(common::bearer(&member_token))
        .set_json(json!({ "title": "Mending Basics", "affiliate_link": "https://aff.example.com/m" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_course_overview_sorting_and_totals() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let (_, admin_token) = ctx.admin().await;

    for (title, clicks, revenue) in [
        ("Upcycling 101", 40, 12000),
        ("Capsule Wardrobe", 120, 3000),
        ("Visible Mending", 75, 9900),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(common::bearer(&admin_token))
            .set_json(json!({
                "title": title,
                "affiliate_link": format!("https://aff.example.com/{}", clicks),
                "clicks": clicks,
                "revenue_cents": revenue
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // clicks descending by default
    let req = test::TestRequest::get()
        .uri("/api/courses")
        .insert_header(common::bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let desc = titles(&body);
    assert_eq!(desc, vec!["Capsule Wardrobe", "Visible Mending", "Upcycling 101"]);
    assert_eq!(body["data"]["sort"], "clicks");
    assert_eq!(body["data"]["order"], "desc");
    assert_eq!(body["data"]["totals"]["clicks"], 235);
    assert_eq!(body["data"]["totals"]["revenue_cents"], 24900);

    let req = test::TestRequest::get()
        .uri("/api/courses?sort=clicks&order=asc")
        .insert_header(common::bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let mut asc = titles(&body);
    asc.reverse();
    assert_eq!(asc, desc);

    let req = test::TestRequest::get()
        .uri("/api/courses?sort=revenue")
        .insert_header(common::bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&body)[0], "Upcycling 101");
}

#[actix_web::test]
async fn test_course_input_errors() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let (_, admin_token) = ctx.admin().await;

    let req = test::TestRequest::get()
        .uri("/api/courses?sort=price")
        .insert_header(common::bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(common::bearer(&admin_token))
        .set_json(json!({ "title": "Broken", "affiliate_link": "not a url" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(common::bearer(&admin_token))
        .set_json(json!({
            "title": "Viral",
            "affiliate_link": "https://aff.example.com/viral",
            "clicks": i64::MAX
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // nothing was stored, so the overview still answers
    let req = test::TestRequest::get()
        .uri("/api/courses")
        .insert_header(common::bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
