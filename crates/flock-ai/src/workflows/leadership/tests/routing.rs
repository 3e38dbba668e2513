use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::leadership::router::{analysis_handler, metrics_handler};
use crate::workflows::leadership::{leadership_router, AnalysisRequest, LeadershipService};

fn analysis_request(church: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(format!("/api/v1/churches/{church}/leadership/analysis"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("json body")))
        .expect("request builds")
}

#[tokio::test]
async fn analysis_route_returns_ranked_profiles() {
    let (service, sink) = build_service();
    let router = leadership_router(Arc::new(service));

    let response = router
        .oneshot(analysis_request(CHURCH, json!({ "today": "2025-10-01" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary"]["qualified_leaders"], 3);
    assert_eq!(payload["profiles"][0]["member_name"], "Marta Ríos");
    assert_eq!(payload["profiles"][0]["leadership_readiness"], "READY_NOW");
    assert_eq!(
        payload["insights"]["succession_plan"][0]["timeline"],
        "Inmediato"
    );
    assert_eq!(sink.stored().len(), 1);
}

#[tokio::test]
async fn analysis_route_accepts_mentee_counts() {
    let (service, _) = build_service();
    let router = leadership_router(Arc::new(service));

    let response = router
        .oneshot(analysis_request(
            CHURCH,
            json!({
                "today": "2025-10-01",
                "target_member_id": "m-director",
                "current_mentees": { "m-director": 3 }
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["profiles"].as_array().map(Vec::len), Some(1));
    assert_eq!(payload["profiles"][0]["current_mentees"], 3);
}

#[tokio::test]
async fn analysis_route_returns_not_found_for_unknown_target() {
    let (service, _) = build_service();
    let router = leadership_router(Arc::new(service));

    let response = router
        .oneshot(analysis_request(
            CHURCH,
            json!({ "target_member_id": "m-ghost" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("m-ghost"));
}

#[tokio::test]
async fn metrics_route_reports_pipeline_counts() {
    let (service, _) = build_service();
    let router = leadership_router(Arc::new(service));

    let response = router
        .oneshot(
            Request::get(format!("/api/v1/churches/{CHURCH}/leadership/metrics"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["development_metrics"]["total_members"], 4);
    assert!(payload["recommendations"]["expand_mentoring"]
        .as_bool()
        .unwrap_or_default());
}

#[tokio::test]
async fn metrics_handler_returns_not_found_for_unknown_church() {
    let (service, _) = build_service();

    let response = metrics_handler::<MemoryRoster, MemorySink>(
        State(Arc::new(service)),
        Path("iglesia-norte".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analysis_handler_returns_internal_error_when_sink_is_offline() {
    let service = Arc::new(LeadershipService::new(
        Arc::new(MemoryRoster::new(congregation(), ministries())),
        Arc::new(OfflineSink),
        service_config(),
    ));

    let response = analysis_handler::<MemoryRoster, OfflineSink>(
        State(service),
        Path(CHURCH.to_string()),
        axum::Json(AnalysisRequest::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
