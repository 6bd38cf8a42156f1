use std::collections::HashMap;
use std::time::Duration;

use spotcsv::config::{
    Config, DEFAULT_HTTP_TIMEOUT_SECS, ProviderCredentials, credentials_from, parse_http_timeout,
};

// Helper function to build a lookup over a fixed set of variables
fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn test_credentials_from_primary_names() {
    let creds = credentials_from(vars(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "secret")]));
    assert_eq!(creds, Some(ProviderCredentials::new("id", "secret")));
}

#[test]
fn test_credentials_fall_back_to_spotify_names() {
    let creds = credentials_from(vars(&[
        ("SPOTIFY_CLIENT_ID", "sp-id"),
        ("SPOTIFY_CLIENT_SECRET", "sp-secret"),
    ]));
    assert_eq!(creds, Some(ProviderCredentials::new("sp-id", "sp-secret")));
}

#[test]
fn test_primary_names_win_over_fallback() {
    let creds = credentials_from(vars(&[
        ("CLIENT_ID", "id"),
        ("SPOTIFY_CLIENT_ID", "sp-id"),
        ("CLIENT_SECRET", "secret"),
        ("SPOTIFY_CLIENT_SECRET", "sp-secret"),
    ]));
    assert_eq!(creds, Some(ProviderCredentials::new("id", "secret")));
}

#[test]
fn test_blank_values_count_as_unset() {
    let creds = credentials_from(vars(&[
        ("CLIENT_ID", "   "),
        ("SPOTIFY_CLIENT_ID", "sp-id"),
        ("CLIENT_SECRET", "secret"),
    ]));
    assert_eq!(creds, Some(ProviderCredentials::new("sp-id", "secret")));

    let creds = credentials_from(vars(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "")]));
    assert_eq!(creds, None);
}

#[test]
fn test_both_credentials_are_required() {
    assert_eq!(credentials_from(vars(&[("CLIENT_ID", "id")])), None);
    assert_eq!(credentials_from(vars(&[("SPOTIFY_CLIENT_SECRET", "s")])), None);
    assert_eq!(credentials_from(vars(&[])), None);
}

#[test]
fn test_parse_http_timeout() {
    let default = Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);

    assert_eq!(parse_http_timeout(None), default);
    assert_eq!(parse_http_timeout(Some("30")), Duration::from_secs(30));
    assert_eq!(parse_http_timeout(Some(" 5 ")), Duration::from_secs(5));
    assert_eq!(parse_http_timeout(Some("0")), default);
    assert_eq!(parse_http_timeout(Some("soon")), default);
    assert_eq!(parse_http_timeout(Some("-3")), default);
    assert_eq!(parse_http_timeout(Some("")), default);
}

#[test]
fn test_with_endpoints_and_timeout() {
    let config = Config::with_endpoints(None, "http://api", "http://token")
        .with_timeout(Duration::from_millis(250));
    assert_eq!(config.api_url, "http://api");
    assert_eq!(config.token_url, "http://token");
    assert_eq!(config.http_timeout, Duration::from_millis(250));
    assert!(config.credentials.is_none());
}
