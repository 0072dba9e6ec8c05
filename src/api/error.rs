use thiserror::Error;

use crate::action::Failure;

/// Errors returned by the remote user/message service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the service
    #[error("Network error calling '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// Success body was not valid JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn code(&self) -> String {
        match self {
            ApiError::Transport { .. } => "network_error".to_string(),
            ApiError::Status { status, .. } => format!("http_{}", status),
            ApiError::Decode(_) => "decode_error".to_string(),
        }
    }
}

impl From<&ApiError> for Failure {
    fn from(err: &ApiError) -> Self {
        Failure::new(Some(err.code()), err.to_string())
    }
}
