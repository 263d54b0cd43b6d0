use super::*;

#[test]
fn show_sets_current_toast() {
    let mut state = ToastState::default();
    let seq = state.show(ToastKind::Success, "copied");
    let toast = state.current.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.text, "copied");
    assert_eq!(toast.seq, seq);
}

#[test]
fn show_replaces_previous_toast_with_new_seq() {
    let mut state = ToastState::default();
    let first = state.show(ToastKind::Success, "copied");
    let second = state.show(ToastKind::Error, "failed");
    assert_ne!(first, second);
    assert_eq!(state.current.as_ref().unwrap().text, "failed");
}

#[test]
fn dismiss_clears_current() {
    let mut state = ToastState::default();
    state.show(ToastKind::Success, "copied");
    state.dismiss();
    assert!(state.current.is_none());
}

#[test]
fn stale_auto_dismiss_is_a_noop() {
    let mut state = ToastState::default();
    let first = state.show(ToastKind::Success, "copied");
    state.show(ToastKind::Error, "failed");

    // The timer scheduled for the first toast fires late; the newer toast stays.
    state.dismiss_if_current(first);
    assert_eq!(state.current.as_ref().unwrap().text, "failed");
}

#[test]
fn current_auto_dismiss_clears() {
    let mut state = ToastState::default();
    let seq = state.show(ToastKind::Success, "copied");
    state.dismiss_if_current(seq);
    assert!(state.current.is_none());
}
