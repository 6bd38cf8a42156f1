use axum::{
    Extension, Json,
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    export::{self, ExportContext},
    types::CsvResponse,
    warning,
};

pub const DOWNLOAD_FILENAME: &str = "spotify-playlist.csv";

// A repeated key resolves to its first occurrence.
fn url_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.as_str())
}

/// Exports a playlist and answers `{"csv": "<CSV text>"}`.
///
/// Handles `GET /api/playlist?url=<playlist-url>`. Each request runs the
/// whole export pipeline with a fresh access token.
///
/// # Arguments
///
/// * `params` - Query string pairs in request order. Only the first `url`
///   pair is used
/// * `ctx` - Shared export context injected by the router
///
/// # Responses
///
/// - 200 `{"csv": "..."}` on success
/// - 400 `{"error": "Missing 'url' parameter"}` without a `url` pair
/// - 400 `{"error": "Invalid Spotify playlist URL"}` if no id can be extracted
/// - 500 `{"error": "Failed to authenticate with Spotify"}`
/// - 500 `{"error": "Failed to fetch playlist from Spotify"}`
///
/// The cause of a failure is logged with [`warning!`](crate::warning) and
/// never returned to the caller.
///
/// # Example
///
/// ```text
/// GET /api/playlist?url=https%3A%2F%2Fopen.spotify.com%2Fplaylist%2F37i9dQZF1DXcBWIGoYBM5M
/// ```
pub async fn playlist(
    Query(params): Query<Vec<(String, String)>>,
    Extension(ctx): Extension<ExportContext>,
) -> Response {
    match export::export_playlist_param(&ctx, url_param(&params)).await {
        Ok(csv) => Json(CsvResponse { csv }).into_response(),
        Err(e) => {
            warning!("Playlist export failed: {}", e);
            e.into_response()
        }
    }
}

/// Exports a playlist and answers the CSV as a file download.
///
/// Handles `GET /api/playlist/download?url=<playlist-url>`. A successful
/// response is `text/csv` with a `Content-Disposition` attachment named
/// [`DOWNLOAD_FILENAME`]. Errors use the same JSON bodies and statuses as
/// [`playlist`].
pub async fn playlist_download(
    Query(params): Query<Vec<(String, String)>>,
    Extension(ctx): Extension<ExportContext>,
) -> Response {
    match export::export_playlist_param(&ctx, url_param(&params)).await {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => {
            warning!("Playlist download failed: {}", e);
            e.into_response()
        }
    }
}
