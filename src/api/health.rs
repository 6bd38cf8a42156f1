use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::export::ExportContext;

/// Reports service status for monitoring and deployment checks.
///
/// Answers `GET /health` with the crate version and whether client
/// credentials are configured. Spotify is never contacted, so a healthy
/// response says nothing about the validity of the credentials.
///
/// # Example
///
/// ```text
/// {"status": "ok", "version": "0.1.0", "credentials_configured": true}
/// ```
pub async fn health(Extension(ctx): Extension<ExportContext>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "credentials_configured": ctx.config.credentials.is_some()
    }))
}
