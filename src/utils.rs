use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAYLIST_ID_PATTERN: Regex =
        Regex::new(r"playlist/([a-zA-Z0-9]+)").expect("playlist id pattern");
}

/// Extracts the playlist identifier from a Spotify playlist URL.
///
/// Returns the run of ASCII alphanumeric characters following the first
/// `playlist/` that is followed by at least one such character. The run
/// stops at the first other character or the end of the input. No
/// trimming, case folding or percent-decoding is applied.
///
/// # Example
///
/// ```
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc");
/// assert_eq!(id.as_deref(), Some("37i9dQZF1DXcBWIGoYBM5M"));
/// ```
pub fn extract_playlist_id(url: &str) -> Option<String> {
    PLAYLIST_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

