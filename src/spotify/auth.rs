use reqwest::Client;

use crate::{
    config::Config,
    error::ExportError,
    types::{AccessToken, TokenResponse},
};

/// Exchanges the configured client credentials for an access token.
///
/// Posts `grant_type=client_credentials` to the token endpoint, sending the
/// client id and secret with HTTP basic auth. A fresh token is requested on
/// every call; the provider's expiry is ignored.
///
/// # Errors
///
/// Returns [`ExportError::Authentication`] when:
/// - no credentials are configured (the provider is not contacted)
/// - the request fails on the network or times out
/// - the provider answers with a non-success status
/// - the body is not JSON or carries no `access_token`
///
/// # Example
///
/// ```
/// let token = request_token(&client, &config).await?;
/// ```
pub async fn request_token(client: &Client, config: &Config) -> Result<AccessToken, ExportError> {
    let Some(credentials) = config.credentials.as_ref() else {
        return Err(ExportError::Authentication(
            "client credentials are not configured".to_string(),
        ));
    };

    let res = client
        .post(&config.token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| ExportError::Authentication(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(ExportError::Authentication(format!(
            "token endpoint answered {status}"
        )));
    }

    let body: TokenResponse = res
        .json()
        .await
        .map_err(|e| ExportError::Authentication(format!("unreadable token response: {e}")))?;

    match body.access_token {
        Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
        _ => Err(ExportError::Authentication(
            "token response has no access_token".to_string(),
        )),
    }
}
