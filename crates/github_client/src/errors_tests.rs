use super::*;
use std::error::Error as StdError;

#[test]
fn test_api_error() {
    let error = Error::ApiError("connection reset".to_string());

    // Test error message
    assert_eq!(error.to_string(), "API request failed: connection reset");

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_auth_error() {
    let error = Error::AuthError("invalid header".to_string());

    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: invalid header"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_deserialization_error_keeps_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
    let error = Error::from(json_error);

    assert!(error
        .to_string()
        .starts_with("Failed to deserialize GitHub response:"));
    assert!(error.source().is_some());
}

#[test]
fn test_invalid_response_error() {
    let error = Error::InvalidResponse;

    assert_eq!(error.to_string(), "Invalid response format");
    assert!(error.source().is_none());
}

#[test]
fn test_unexpected_status_error() {
    let error = Error::UnexpectedStatus {
        status: 502,
        path: "/repos/acme/widgets/actions/runs".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "GitHub returned status 502 for /repos/acme/widgets/actions/runs"
    );
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
