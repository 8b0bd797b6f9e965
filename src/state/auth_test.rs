use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.email().is_none());
}

#[test]
fn email_reads_signed_in_identity() {
    let state = AuthState {
        user: Some(User {
            id: Some(7),
            email: "kim@example.com".to_owned(),
            full_name: None,
        }),
    };
    assert_eq!(state.email(), Some("kim@example.com"));
}
