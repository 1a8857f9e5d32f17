// Upstream call failure

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
    /// The call never produced a usable response (connect, timeout, decode).
    #[error("{0}")]
    Transport(String),
}

impl UpstreamError {
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Transport(_) => None,
        }
    }
}
