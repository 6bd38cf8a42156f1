use axum::{http::StatusCode, response::IntoResponse};
use spotcsv::config::ProviderCredentials;
use spotcsv::error::{ExportError, MSG_AUTHENTICATION, MSG_FETCH, MSG_INVALID_URL, MSG_MISSING_URL};
use spotcsv::types::AccessToken;

#[test]
fn test_validation_errors_are_bad_requests() {
    assert_eq!(ExportError::MissingUrl.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ExportError::InvalidUrl.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ExportError::MissingUrl.public_message(), MSG_MISSING_URL);
    assert_eq!(ExportError::InvalidUrl.public_message(), MSG_INVALID_URL);
}

#[test]
fn test_provider_errors_hide_their_cause() {
    let err = ExportError::Authentication("401 invalid_client".to_string());
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), MSG_AUTHENTICATION);
    // the cause is kept for the log
    assert!(err.to_string().contains("invalid_client"));

    let err = ExportError::Fetch("503 Service Unavailable".to_string());
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), MSG_FETCH);

    let err = ExportError::Report("broken pipe".to_string());
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), MSG_FETCH);
}

#[test]
fn test_error_into_response_keeps_status() {
    let res = ExportError::Fetch("boom".to_string()).into_response();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_secrets_are_redacted_in_debug_output() {
    let creds = ProviderCredentials::new("client", "very-secret");
    let out = format!("{creds:?}");
    assert!(out.contains("client"));
    assert!(!out.contains("very-secret"));

    let token = AccessToken::new("BQC-secret-token");
    assert!(!format!("{token:?}").contains("BQC"));
}
