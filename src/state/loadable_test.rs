use super::*;

#[test]
fn default_is_idle() {
    assert_eq!(Loadable::<u8>::default(), Loadable::Idle);
}

#[test]
fn from_result_prefers_server_message() {
    let failed: Loadable<u8> = Loadable::from_result(Err(ApiError::Rejected("name taken".into())), "Could not save.");
    assert_eq!(failed.error(), Some("name taken"));
}

#[test]
fn from_result_hides_transport_details() {
    let failed: Loadable<u8> = Loadable::from_result(Err(ApiError::Transport("CORS".into())), "Could not load.");
    assert_eq!(failed.error(), Some("Could not load."));
}

#[test]
fn accessors_match_variant() {
    let loaded = Loadable::Loaded(3);
    assert_eq!(loaded.loaded(), Some(&3));
    assert!(!loaded.is_loading());
    assert!(Loadable::<u8>::Loading.is_loading());
    assert_eq!(Loadable::<u8>::Loading.loaded(), None);
}

#[test]
fn map_keeps_failure() {
    assert_eq!(Loadable::Loaded(2).map(|n| n * 10), Loadable::Loaded(20));
    assert_eq!(Loadable::<u8>::Failed("x".into()).map(|n| n * 10), Loadable::Failed("x".into()));
}
