//! The export pipeline shared by the HTTP endpoints and the command line.
//!
//! ```text
//! url ──extract──▶ playlist id ──request_token──▶ access token ──get_playlist──▶ CSV
//! ```
//!
//! Every step runs strictly after the previous one and nothing is retried.
//! The access token lives only for the duration of one export.

use std::sync::Arc;

use reqwest::Client;

use crate::{Res, config::Config, error::ExportError, info, report, spotify, utils};

/// Read-only state shared by all exports: configuration plus one HTTP client.
#[derive(Debug, Clone)]
pub struct ExportContext {
    pub config: Arc<Config>,
    pub client: Client,
}

impl ExportContext {
    /// Builds the outbound HTTP client with the configured timeout.
    pub fn new(config: Config) -> Res<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ExportContext {
            config: Arc::new(config),
            client,
        })
    }
}

/// Runs the full pipeline for a playlist URL and returns the CSV text.
///
/// # Errors
///
/// - [`ExportError::InvalidUrl`] if no playlist id can be extracted
/// - [`ExportError::Authentication`] if the token exchange fails; the
///   playlist endpoint is not called in that case
/// - [`ExportError::Fetch`] if the playlist cannot be fetched or parsed
pub async fn export_playlist(ctx: &ExportContext, url: &str) -> Result<String, ExportError> {
    let playlist_id = utils::extract_playlist_id(url).ok_or(ExportError::InvalidUrl)?;

    let token = spotify::auth::request_token(&ctx.client, &ctx.config).await?;
    let playlist =
        spotify::playlist::get_playlist(&ctx.client, &ctx.config, &playlist_id, &token).await?;

    let csv = report::playlist_to_csv(&playlist)?;
    info!(
        "Exported playlist {} ({} items)",
        playlist_id,
        playlist.tracks.items.len()
    );
    Ok(csv)
}

/// Like [`export_playlist`], for a URL that may be missing altogether.
pub async fn export_playlist_param(
    ctx: &ExportContext,
    url: Option<&str>,
) -> Result<String, ExportError> {
    let url = url.ok_or(ExportError::MissingUrl)?;
    export_playlist(ctx, url).await
}
