use super::*;

// =============================================================
// Message priority chain
// =============================================================

#[test]
fn server_message_wins() {
    let msg = normalize_message(
        Some("Email already used".to_owned()),
        Some("{\"message\":\"Email already used\"}".to_owned()),
        Some("Request failed with status 409".to_owned()),
    );
    assert_eq!(msg, "Email already used");
}

#[test]
fn raw_body_beats_transport() {
    let msg = normalize_message(
        None,
        Some("subject limit reached".to_owned()),
        Some("Request failed with status 422".to_owned()),
    );
    assert_eq!(msg, "subject limit reached");
}

#[test]
fn transport_message_when_no_body() {
    let msg = normalize_message(None, None, Some("Network Error".to_owned()));
    assert_eq!(msg, "Network Error");
}

#[test]
fn literal_fallback_when_nothing_known() {
    assert_eq!(normalize_message(None, None, None), FALLBACK_MESSAGE);
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn structured_body_yields_message_field() {
    let err = ApiError::from_response_body("{\"message\":\"Email already used\"}");
    assert_eq!(err.message, "Email already used");
}

#[test]
fn unstructured_body_yields_raw_text() {
    let err = ApiError::from_response_body("subject limit reached");
    assert_eq!(err.message, "subject limit reached");
}

#[test]
fn json_body_without_message_field_is_kept_raw() {
    let err = ApiError::from_response_body("{\"code\":42}");
    assert_eq!(err.message, "{\"code\":42}");
}

#[test]
fn empty_body_falls_back() {
    let err = ApiError::from_response_body("   ");
    assert_eq!(err.message, FALLBACK_MESSAGE);
}

// =============================================================
// Transport failures
// =============================================================

#[test]
fn transport_error_keeps_its_message() {
    let err = ApiError::from_transport("Network Error");
    assert_eq!(err.message, "Network Error");
}

#[test]
fn blank_transport_message_falls_back() {
    let err = ApiError::from_transport("");
    assert_eq!(err.message, FALLBACK_MESSAGE);
}

#[test]
fn display_is_the_message() {
    assert_eq!(ApiError::new("boom").to_string(), "boom");
}
