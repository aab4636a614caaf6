use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::ErrorBody;

/// Every way a card request can fail. The display string is the `error`
/// message sent back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("No audio URL found in card description. Please include \"Audio URL: your-url-here\"")]
    MissingAudioUrl,

    #[error("Invalid audio URL format or unsupported file type")]
    InvalidAudioUrl,

    #[error("Failed to process card data")]
    Internal(#[source] anyhow::Error),
}

impl ProcessError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProcessError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProcessError::MissingAudioUrl | ProcessError::InvalidAudioUrl => {
                StatusCode::BAD_REQUEST
            }
            ProcessError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        let details = match &self {
            ProcessError::Internal(source) => Some(source.to_string()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            details,
        };

        (self.status_code(), Json(body)).into_response()
    }
}
