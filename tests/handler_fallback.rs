mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use htmx_demos::domain::entities::{ROUTES, route};
use htmx_demos::routes::app_router;
use std::time::Duration;
use tower::ServiceExt;

#[tokio::test]
async fn test_virtual_routes_redirect_to_fallback() {
    let server = common::make_server();

    let virtual_routes: Vec<_> = route::virtual_routes(&ROUTES).collect();
    assert_eq!(virtual_routes.len(), 3);

    for virtual_route in virtual_routes {
        let response = server.get(virtual_route.path).await;

        response.assert_status(StatusCode::FOUND);
        let fallback = virtual_route.fallback.unwrap();
        assert_eq!(response.header("location"), fallback.path);
    }
}

#[tokio::test]
async fn test_month_redirects_to_demo03() {
    let server = common::make_server();

    let response = server.get("/demo03-month").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/demo03");
}

#[tokio::test]
async fn test_fallback_target_serves_page() {
    let server = common::make_server();

    server.get("/demo03").await.assert_status_ok();
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = app_router(common::create_test_state(Duration::ZERO), "static");

    let response = app
        .clone()
        .oneshot(Request::get("/demo03-month/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/demo03");

    let response = app
        .oneshot(Request::get("/demo03/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
