use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::ChurchId;
use super::roster::repository::{ProfileSink, RosterError, RosterProvider};
use super::service::{AnalysisRequest, LeadershipService, LeadershipServiceError};

/// Router builder exposing the leadership analysis endpoints.
pub fn leadership_router<R, S>(service: Arc<LeadershipService<R, S>>) -> Router
where
    R: RosterProvider + 'static,
    S: ProfileSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/churches/:church_id/leadership/analysis",
            post(analysis_handler::<R, S>),
        )
        .route(
            "/api/v1/churches/:church_id/leadership/metrics",
            get(metrics_handler::<R, S>),
        )
        .with_state(service)
}

pub(crate) async fn analysis_handler<R, S>(
    State(service): State<Arc<LeadershipService<R, S>>>,
    Path(church_id): Path<String>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response
where
    R: RosterProvider + 'static,
    S: ProfileSink + 'static,
{
    match service.analyze(&ChurchId(church_id), request) {
        Ok(analysis) => (StatusCode::OK, axum::Json(analysis)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn metrics_handler<R, S>(
    State(service): State<Arc<LeadershipService<R, S>>>,
    Path(church_id): Path<String>,
) -> Response
where
    R: RosterProvider + 'static,
    S: ProfileSink + 'static,
{
    match service.metrics(&ChurchId(church_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: LeadershipServiceError) -> Response {
    let status = match &error {
        LeadershipServiceError::MemberNotFound(_)
        | LeadershipServiceError::Roster(RosterError::UnknownChurch(_)) => StatusCode::NOT_FOUND,
        LeadershipServiceError::Roster(RosterError::Unavailable(_))
        | LeadershipServiceError::Sink(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
