use reqwest::Client;

use crate::{
    config::Config,
    error::ExportError,
    types::{AccessToken, Playlist},
};

/// Fetches a playlist with its embedded track listing.
///
/// Issues `GET {api_url}/playlists/{playlist_id}` with the access token as
/// bearer authorization. Only the first page of tracks that Spotify embeds
/// in the playlist object is returned.
///
/// # Arguments
///
/// * `client` - Shared HTTP client carrying the configured timeout
/// * `config` - Supplies the Web API base URL
/// * `playlist_id` - Identifier extracted from the playlist URL
/// * `token` - Access token obtained for this export
///
/// # Errors
///
/// Returns [`ExportError::Fetch`] when:
/// - the request fails on the network or times out
/// - Spotify answers with a non-success status
/// - the body does not have the expected playlist shape
///
/// # Example
///
/// ```
/// let token = auth::request_token(&client, &config).await?;
/// let playlist = get_playlist(&client, &config, "37i9dQZF1DXcBWIGoYBM5M", &token).await?;
/// println!("{} items", playlist.tracks.items.len());
/// ```
pub async fn get_playlist(
    client: &Client,
    config: &Config,
    playlist_id: &str,
    token: &AccessToken,
) -> Result<Playlist, ExportError> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = config.api_url.trim_end_matches('/'),
        id = playlist_id
    );

    let res = client
        .get(&api_url)
        .bearer_auth(token.as_str())
        .send()
        .await
        .map_err(|e| ExportError::Fetch(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(ExportError::Fetch(format!(
            "playlist {playlist_id} answered {status}"
        )));
    }

    res.json::<Playlist>()
        .await
        .map_err(|e| ExportError::Fetch(format!("unexpected playlist payload: {e}")))
}
