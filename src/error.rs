//! Error taxonomy for playlist exports.
//!
//! Every failure of the export pipeline ends up as one [`ExportError`]. The
//! caller only ever sees the fixed message of the variant; the attached cause
//! is meant for the log.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const MSG_MISSING_URL: &str = "Missing 'url' parameter";
pub const MSG_INVALID_URL: &str = "Invalid Spotify playlist URL";
pub const MSG_AUTHENTICATION: &str = "Failed to authenticate with Spotify";
pub const MSG_FETCH: &str = "Failed to fetch playlist from Spotify";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Missing 'url' parameter")]
    MissingUrl,

    #[error("Invalid Spotify playlist URL")]
    InvalidUrl,

    #[error("Failed to authenticate with Spotify: {0}")]
    Authentication(String),

    #[error("Failed to fetch playlist from Spotify: {0}")]
    Fetch(String),

    // CSV writer failures share the fetch message towards the caller
    #[error("Failed to build CSV report: {0}")]
    Report(String),
}

impl ExportError {
    /// Validation problems are the caller's fault, everything else is ours.
    pub fn status(&self) -> StatusCode {
        match self {
            ExportError::MissingUrl | ExportError::InvalidUrl => StatusCode::BAD_REQUEST,
            ExportError::Authentication(_) | ExportError::Fetch(_) | ExportError::Report(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message returned to the caller. Provider details never leak here.
    pub fn public_message(&self) -> &'static str {
        match self {
            ExportError::MissingUrl => MSG_MISSING_URL,
            ExportError::InvalidUrl => MSG_INVALID_URL,
            ExportError::Authentication(_) => MSG_AUTHENTICATION,
            ExportError::Fetch(_) | ExportError::Report(_) => MSG_FETCH,
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Report(err.to_string())
    }
}

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

