use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use kanvas_api::{build_router, state::AppState};
use kanvas_db::{StoreHandle, UnavailableReason};
use tower::ServiceExt;

use crate::fixtures::test_app::test_settings;

fn degraded_router() -> axum::Router {
    router_with_origins(vec![])
}

fn router_with_origins(origins: Vec<String>) -> axum::Router {
    let mut settings = test_settings();
    settings.app.cors_origins = origins;
    let store = StoreHandle::Unavailable(UnavailableReason::NotConfigured);
    build_router(AppState::new(store, settings))
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/session/me")
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = degraded_router()
        .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sample_project_served_without_network() {
    let resp = degraded_router()
        .oneshot(Request::builder().uri("/api/project/p2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let resp = degraded_router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/organization")
                .header("Origin", "http://localhost:5173")
                .header("Access-Control-Request-Method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    assert!(!resp.headers().contains_key("access-control-allow-credentials"));
}

#[tokio::test]
async fn configured_origins_may_send_the_session_cookie() {
    let router = router_with_origins(vec!["http://localhost:5173".to_string()]);

    let resp = router
        .clone()
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(resp.headers()["access-control-allow-credentials"], "true");

    let resp = router.oneshot(preflight("http://evil.test")).await.unwrap();
    assert!(!resp.headers().contains_key("access-control-allow-origin"));
}
