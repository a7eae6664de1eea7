//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt) - no TCP binding needed.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use goodnumber_core::{Family, GapSolver, IncrementSet, Planner, TargetFinder};
use goodnumber_server::{app, router, AppState};

fn default_app() -> axum::Router {
    router(Arc::new(AppState::default()))
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::post("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ── GET /health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let resp = default_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["status"], "OK");
}

// ── GET / ────────────────────────────────────────────────────────────

#[tokio::test]
async fn index_serves_page() {
    let resp = default_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let html = body_text(resp.into_body()).await;
    assert!(html.contains("<title>Ingress Good Number</title>"));
    assert!(html.contains("goodnumber.postAp()"));
}

// ── POST / ───────────────────────────────────────────────────────────

#[tokio::test]
async fn plan_reachable_target() {
    let resp = default_app().oneshot(post_json(r#"{"ap": 1980}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["target"], 2000);
    assert_eq!(json["recharge"], 2);

    let names = [
        "full deploy",
        "create control field",
        "destroy control field",
        "capture portal",
        "complete portal",
        "create link",
        "destroy link",
        "place resonator",
        "hack portal",
        "destroy resonator",
        "upgrade resonator",
        "recharge",
    ];
    for name in names {
        assert!(json[name].is_u64(), "missing field {name}");
    }
    assert_eq!(json.as_object().unwrap().len(), names.len() + 1);
}

#[tokio::test]
async fn plan_unreachable_gap_is_all_zero() {
    // 990 -> 999, gap 9 is below every gain
    let resp = default_app().oneshot(post_json(r#"{"ap": 990}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["target"], 999);
    for (name, value) in json.as_object().unwrap() {
        if name != "target" {
            assert_eq!(value, 0, "{name}");
        }
    }
}

#[tokio::test]
async fn plan_malformed_json_is_400() {
    let resp = default_app().oneshot(post_json("{ap: ")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("An error occurred during parsing"));
}

#[tokio::test]
async fn plan_negative_ap_is_400() {
    let resp = default_app().oneshot(post_json(r#"{"ap": -3}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn plan_missing_field_is_400() {
    let resp = default_app().oneshot(post_json(r#"{"score": 3}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn plan_without_target_is_422() {
    let resp = default_app()
        .oneshot(post_json(&format!(r#"{{"ap": {}}}"#, u64::MAX)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn plan_uses_configured_planner() {
    let planner = Planner::new(
        TargetFinder::new().with_families([Family::PiDigit]),
        GapSolver::new(IncrementSet::from_values(&[3, 1]).unwrap()),
    );
    let app = router(Arc::new(AppState::new(planner)));

    let resp = app.oneshot(post_json(r#"{"ap": 310}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    // 310 -> 314 = 3 + 1
    assert_eq!(json["target"], 314);
    assert_eq!(json["3"], 1);
    assert_eq!(json["1"], 1);
}

#[tokio::test]
async fn plan_waits_for_free_slot() {
    let state = Arc::new(AppState::default().with_plan_limit(1));
    assert_eq!(state.plan_slots().available_permits(), 1);

    let held = state.plan_slots().try_acquire().unwrap();
    let pending = router(Arc::clone(&state)).oneshot(post_json(r#"{"ap": 1980}"#));
    let pending = tokio::spawn(pending);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!pending.is_finished());

    drop(held);
    let resp = pending.await.unwrap().unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(state.plan_slots().available_permits(), 1);

    // Sequential requests reuse the single slot.
    for _ in 0..2 {
        let resp = router(Arc::clone(&state))
            .oneshot(post_json(r#"{"ap": 990}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(state.plan_slots().available_permits(), 1);
}

#[tokio::test]
async fn plan_body_keeps_action_order() {
    let resp = default_app().oneshot(post_json(r#"{"ap": 1980}"#)).await.unwrap();
    let text = body_text(resp.into_body()).await;
    assert!(text.starts_with(r#"{"target":2000,"full deploy":0"#));
    assert!(text.ends_with(r#""recharge":2}"#));
}

#[tokio::test]
async fn put_is_405() {
    let resp = default_app()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ── static files ─────────────────────────────────────────────────────

#[tokio::test]
async fn static_assets_served() {
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
    let app = app(Arc::new(AppState::default()), static_dir);

    let resp = app
        .oneshot(Request::get("/main.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let js = body_text(resp.into_body()).await;
    assert!(js.contains("postAp"));
    // Action names come from config and are written as text, never markup.
    assert!(js.contains("textContent"));
    assert!(!js.contains("innerHTML"));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
    let app = app(Arc::new(AppState::default()), static_dir);

    let resp = app
        .oneshot(Request::get("/nope.txt").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
