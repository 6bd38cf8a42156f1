//! Configuration management for the playlist export service.
//!
//! Configuration is read from environment variables exactly once at process
//! start and frozen into a [`Config`] value that is handed to the server or
//! the command line. Nothing reads the environment after that point.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, fmt, path::PathBuf, time::Duration};

use crate::warning;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// Looks for `spotcsv/.env` in the platform-specific local data directory
/// first and then for `.env` in the working directory. Both files are
/// optional. Variables already present in the environment are never
/// overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotcsv/.env`
/// - macOS: `~/Library/Application Support/spotcsv/.env`
/// - Windows: `%LOCALAPPDATA%/spotcsv/.env`
///
/// # Errors
///
/// Returns an error if a `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcsv/.env");
    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Client id and secret used for the client credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ProviderCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        ProviderCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

// Never print the secret, not even in debug output.
impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when the credentials are not configured. The service still
    /// runs, but every export fails authentication.
    pub credentials: Option<ProviderCredentials>,
    pub server_addr: String,
    pub api_url: String,
    pub token_url: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the current environment.
    ///
    /// Missing credentials are reported with a warning instead of an error
    /// so that the health endpoint stays available.
    pub fn from_env() -> Self {
        let credentials = spotify_credentials();
        if credentials.is_none() {
            warning!("CLIENT_ID / CLIENT_SECRET are not set, every export will fail to authenticate");
        }

        Config {
            credentials,
            server_addr: server_addr(),
            api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
            http_timeout: http_timeout(),
        }
    }

    /// Configuration pointing at custom provider endpoints.
    ///
    /// Used to run the pipeline against a stand-in provider.
    pub fn with_endpoints(
        credentials: Option<ProviderCredentials>,
        api_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Config {
            credentials,
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            api_url: api_url.into(),
            token_url: token_url.into(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    /// Replaces the timeout applied to outbound requests.
    pub fn with_timeout(mut self, http_timeout: Duration) -> Self {
        self.http_timeout = http_timeout;
        self
    }
}

/// Returns the first non-empty value among the given variable names.
fn first_var<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

/// Returns the Spotify client credentials.
///
/// Reads `CLIENT_ID` and `CLIENT_SECRET`, falling back to
/// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`. Both values must be
/// present for credentials to be returned.
pub fn spotify_credentials() -> Option<ProviderCredentials> {
    credentials_from(|name| env::var(name).ok())
}

/// Resolves the client credentials through an arbitrary variable lookup.
///
/// A blank value counts as unset, so a blank `CLIENT_ID` still falls back
/// to `SPOTIFY_CLIENT_ID`.
///
/// # Arguments
///
/// * `lookup` - Returns the value of a variable by name, `None` if unset
///
/// # Example
///
/// ```
/// let creds = credentials_from(|name| match name {
///     "SPOTIFY_CLIENT_ID" => Some("id".to_string()),
///     "CLIENT_SECRET" => Some("secret".to_string()),
///     _ => None,
/// });
/// assert!(creds.is_some());
/// ```
pub fn credentials_from<F>(lookup: F) -> Option<ProviderCredentials>
where
    F: Fn(&str) -> Option<String>,
{
    let client_id = first_var(&lookup, &["CLIENT_ID", "SPOTIFY_CLIENT_ID"])?;
    let client_secret = first_var(&lookup, &["CLIENT_SECRET", "SPOTIFY_CLIENT_SECRET"])?;
    Some(ProviderCredentials::new(client_id, client_secret))
}

/// Returns the address the HTTP service binds to.
///
/// Reads `SERVER_ADDRESS`, e.g. `0.0.0.0:8080`. Defaults to
/// `127.0.0.1:5000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the Spotify token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the timeout applied to every outbound request.
///
/// Reads `HTTP_TIMEOUT_SECS`, see [`parse_http_timeout`].
pub fn http_timeout() -> Duration {
    parse_http_timeout(env::var("HTTP_TIMEOUT_SECS").ok().as_deref())
}

/// Parses a raw `HTTP_TIMEOUT_SECS` value.
///
/// Unset, unparseable or zero values fall back to the default of 10 seconds.
/// Anything but an unset value that falls back is reported with a warning.
pub fn parse_http_timeout(raw: Option<&str>) -> Duration {
    let secs = match raw {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warning!(
                    "Ignoring invalid HTTP_TIMEOUT_SECS={}, using {}s",
                    raw,
                    DEFAULT_HTTP_TIMEOUT_SECS
                );
                DEFAULT_HTTP_TIMEOUT_SECS
            }
        },
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };
    Duration::from_secs(secs)
}
