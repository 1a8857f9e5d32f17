use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("misconfig: missing {}", .0.join(", "))]
    Misconfigured(Vec<String>),
    #[error("{error}")]
    BadRequest {
        error: String,
        details: Option<String>,
    },
    #[error("bad payload: required {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl AppError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        AppError::BadRequest {
            error: error.into(),
            details: None,
        }
    }
}
