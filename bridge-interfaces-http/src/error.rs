use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use bridge_application::AppError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    Misconfigured(Vec<String>),
    BadRequest {
        error: String,
        details: Option<String>,
    },
    BadPayload {
        required: Vec<String>,
    },
    NotFound {
        path: String,
    },
}

impl HttpError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        HttpError::BadRequest {
            error: error.into(),
            details: None,
        }
    }
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Misconfigured(missing) => HttpError::Misconfigured(missing),
            AppError::BadRequest { error, details } => HttpError::BadRequest { error, details },
            AppError::MissingFields(required) => HttpError::BadPayload { required },
        }
    }
}

#[derive(Serialize, Default)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl ErrorBody {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            ..Self::default()
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, ErrorBody::new("unauthorized")),
            HttpError::Misconfigured(missing) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    missing: Some(missing),
                    ..ErrorBody::new("misconfig")
                },
            ),
            HttpError::BadRequest { error, details } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    details,
                    ..ErrorBody::new(&error)
                },
            ),
            HttpError::BadPayload { required } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    required: Some(required),
                    ..ErrorBody::new("bad payload")
                },
            ),
            HttpError::NotFound { path } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    path: Some(path),
                    ..ErrorBody::new("endpoint not found")
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
