use super::*;

// =============================================================
// Publish ordering
// =============================================================

#[test]
fn publish_preserves_order() {
    let mut state = ToastState::default();
    state.publish("first", ToastLevel::Info, DEFAULT_TOAST_MS);
    state.publish("second", ToastLevel::Success, DEFAULT_TOAST_MS);
    state.publish("third", ToastLevel::Error, DEFAULT_TOAST_MS);

    let texts: Vec<_> = state.entries().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn publish_assigns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.publish("a", ToastLevel::Info, DEFAULT_TOAST_MS);
    let b = state.publish("b", ToastLevel::Info, DEFAULT_TOAST_MS);
    let c = state.publish("c", ToastLevel::Info, DEFAULT_TOAST_MS);

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn publish_with_no_consumer_is_silent() {
    // Publishing into a queue nobody reads must neither fail nor drop the
    // entry.
    let mut state = ToastState::default();
    let id = state.publish("unseen", ToastLevel::Info, DEFAULT_TOAST_MS);

    assert_eq!(state.entries().len(), 1);
    assert_eq!(state.entries()[0].id, id);
}

#[test]
fn custom_lifetime_is_recorded() {
    let mut state = ToastState::default();
    state.publish("slow", ToastLevel::Info, 10_000);
    assert_eq!(state.entries()[0].duration_ms, 10_000);
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.publish("first", ToastLevel::Info, DEFAULT_TOAST_MS);
    state.publish("second", ToastLevel::Info, DEFAULT_TOAST_MS);

    state.dismiss(first);

    let texts: Vec<_> = state.entries().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["second"]);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    // Expiry can race a manual close; the second dismissal must be silent.
    let mut state = ToastState::default();
    let id = state.publish("once", ToastLevel::Info, DEFAULT_TOAST_MS);
    state.dismiss(id);
    state.dismiss(id);
    assert!(state.entries().is_empty());
}

// =============================================================
// Levels
// =============================================================

#[test]
fn level_classes_are_distinct() {
    assert_ne!(ToastLevel::Success.css_class(), ToastLevel::Error.css_class());
    assert_ne!(ToastLevel::Error.css_class(), ToastLevel::Info.css_class());
}

#[test]
fn default_level_is_info() {
    assert_eq!(ToastLevel::default(), ToastLevel::Info);
}
