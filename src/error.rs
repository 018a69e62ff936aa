use crate::analyzer::AnalysisError;
use crate::api::dtos::ErrorResponse;
use crate::extractor::ExtractError;
use crate::fetcher::FetchError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-level failures and their HTTP mapping.
///
/// Input, fetch and extraction failures are the client's problem (400);
/// a collaborator reply we cannot repair is ours (500). Storage failures
/// never appear here: they are logged and swallowed so a computed analysis
/// still reaches the caller.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("failed to extract content from URL: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to extract content from URL: {0}")]
    Extraction(#[from] ExtractError),

    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Fetch(_) | Self::Extraction(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
