//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::SnippetError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// `error.{errorKey}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Entity the request was about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Machine-readable reason code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            message: None,
            entity_name: None,
            error_key: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add reason code, also rendered as `message`
    pub fn with_error_key(mut self, key: &str) -> Self {
        self.message = Some(format!("error.{}", key));
        self.error_key = Some(key.to_string());
        self
    }

    /// Add entity name
    pub fn with_entity(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SnippetError) -> Problem {
    let (status, title) = match &error {
        SnippetError::IdExists { .. }
        | SnippetError::IdNull { .. }
        | SnippetError::IdInvalid { .. }
        | SnippetError::IdNotFound { .. } => (StatusCode::BAD_REQUEST, "Bad Request"),
        SnippetError::FieldRequired { .. } | SnippetError::InvalidSort { .. } => {
            (StatusCode::BAD_REQUEST, "Validation Error")
        }
        SnippetError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not Found"),
        SnippetError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    };

    let detail = match &error {
        SnippetError::Internal => "An unexpected error occurred".to_string(),
        other => other.to_string(),
    };

    let mut problem = Problem::new(status, title)
        .with_detail(detail)
        .with_error_key(error.reason_code());
    if let Some(entity) = error.entity() {
        problem = problem.with_entity(entity.entity_name());
    }
    problem
}

/// Map an unreadable request body to a 400
pub fn map_json_rejection(rejection: JsonRejection) -> Problem {
    let detail = rejection.body_text();
    tracing::debug!("Rejected request body: {}", detail);
    let status = match &rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    Problem::new(status, "Bad Request")
        .with_detail(detail)
        .with_error_key("badrequest")
}

/// Map an unparsable path id to a 400
pub fn map_path_rejection(rejection: PathRejection) -> Problem {
    let detail = rejection.body_text();
    tracing::debug!("Rejected path: {}", detail);
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request")
        .with_detail(detail)
        .with_error_key("badrequest")
}
