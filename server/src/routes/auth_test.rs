use super::*;

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_truthy_values() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "raw = {raw:?}");
    }
}

#[test]
fn parse_bool_falsy_values() {
    for raw in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "raw = {raw:?}");
    }
}

#[test]
fn parse_bool_rejects_garbage() {
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}

// =============================================================================
// error mapping
// =============================================================================

#[test]
fn email_auth_error_to_status_maps_input_errors() {
    assert_eq!(email_auth_error_to_status(EmailAuthError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(email_auth_error_to_status(EmailAuthError::InvalidCode), StatusCode::BAD_REQUEST);
}

#[test]
fn email_auth_error_to_status_maps_verification_failure() {
    assert_eq!(
        email_auth_error_to_status(EmailAuthError::VerificationFailed),
        StatusCode::UNAUTHORIZED
    );
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_scoped_to_root() {
    let cookie = session_cookie("tok".into());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn clear_session_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
