use super::*;

#[test]
fn auth_state_defaults_to_loading_without_user() {
    let s = AuthState::default();
    assert!(s.user.is_none());
    assert!(s.loading);
}
