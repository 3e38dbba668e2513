use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::leadership::{LeadershipServiceError, RosterError, RosterImportError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Roster(RosterImportError),
    Leadership(LeadershipServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Roster(err) => write!(f, "roster import error: {}", err),
            AppError::Leadership(err) => write!(f, "leadership analysis error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Roster(err) => Some(err),
            AppError::Leadership(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Roster(_) => StatusCode::BAD_REQUEST,
            AppError::Leadership(LeadershipServiceError::MemberNotFound(_))
            | AppError::Leadership(LeadershipServiceError::Roster(RosterError::UnknownChurch(_))) => {
                StatusCode::NOT_FOUND
            }
            AppError::Leadership(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RosterImportError> for AppError {
    fn from(value: RosterImportError) -> Self {
        Self::Roster(value)
    }
}

impl From<LeadershipServiceError> for AppError {
    fn from(value: LeadershipServiceError) -> Self {
        Self::Leadership(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::leadership::{MemberId, RosterViolation};

    #[test]
    fn maps_missing_members_to_not_found() {
        let err = AppError::from(LeadershipServiceError::MemberNotFound(MemberId(
            "m-404".to_string(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn maps_bad_roster_exports_to_bad_request() {
        let err = AppError::from(RosterImportError::Violation(RosterViolation::MissingMemberId));
        assert!(err.to_string().starts_with("roster import error"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
