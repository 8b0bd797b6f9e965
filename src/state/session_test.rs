use super::*;

fn user() -> User {
    User {
        id: Some(1),
        email: "sam@example.com".to_owned(),
        full_name: Some("Sam Doe".to_owned()),
    }
}

// =============================================================
// Tri-state
// =============================================================

#[test]
fn status_defaults_to_unknown() {
    assert_eq!(SessionStatus::default(), SessionStatus::Unknown);
}

#[test]
fn successful_check_is_authenticated() {
    let check = SessionCheck::from_result(Ok(user()));
    assert_eq!(check.status, SessionStatus::Authenticated);
    assert_eq!(
        check.user.map(|u| u.email),
        Some("sam@example.com".to_owned())
    );
}

#[test]
fn any_failure_collapses_to_unauthenticated() {
    // Expired session, network failure, malformed body — all one outcome.
    for message in ["401", "Network Error", "unexpected end of input"] {
        let check = SessionCheck::from_result(Err(ApiError::new(message)));
        assert_eq!(check.status, SessionStatus::Unauthenticated);
        assert!(check.user.is_none());
    }
}
