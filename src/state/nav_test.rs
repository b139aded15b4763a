use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;

struct FakeShellApi {
    profile: Result<UserProfile, ApiError>,
    communities: Result<Vec<CommunitySummary>, ApiError>,
    calls: AtomicUsize,
}

#[async_trait(?Send)]
impl NavShellApi for FakeShellApi {
    async fn profile(&self, _user_id: &str) -> Result<UserProfile, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profile.clone()
    }

    async fn joined_communities(&self, _user_id: &str) -> Result<Vec<CommunitySummary>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.communities.clone()
    }
}

fn alice() -> UserProfile {
    UserProfile { name: "Alice".into(), icon_name: Some("alice.png".into()), ..UserProfile::default() }
}

fn chess_club() -> CommunitySummary {
    CommunitySummary { id: "42".into(), name: "Chess".into(), icon_url: None }
}

// =============================================================
// Mount
// =============================================================

#[test]
fn no_user_is_degraded_and_idle() {
    let state = NavShellState::for_user(None);
    assert!(state.is_degraded());
    assert_eq!(state.profile, Loadable::Idle);
    assert_eq!(state.communities, Loadable::Idle);
    assert_eq!(state.display_name(), "");
}

#[test]
fn blank_user_id_counts_as_missing() {
    assert!(NavShellState::for_user(Some("  ".into())).is_degraded());
}

#[test]
fn known_user_starts_both_sections_loading() {
    let state = NavShellState::for_user(Some("7".into()));
    assert!(state.profile.is_loading());
    assert!(state.communities.is_loading());
}

// =============================================================
// Independent loads
// =============================================================

#[test]
fn profile_failure_does_not_block_communities() {
    let api = FakeShellApi {
        profile: Err(ApiError::Status { status: 500, message: None }),
        communities: Ok(vec![chess_club()]),
        calls: AtomicUsize::new(0),
    };
    let profile = block_on(load_profile(&api, "7"));
    let communities = block_on(load_communities(&api, "7"));

    assert!(profile.error().is_some());
    assert_eq!(communities, Loadable::Loaded(vec![chess_club()]));
    assert_eq!(api.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn communities_failure_keeps_profile() {
    let api = FakeShellApi {
        profile: Ok(alice()),
        communities: Err(ApiError::Transport("offline".into())),
        calls: AtomicUsize::new(0),
    };
    let mut state = NavShellState::for_user(Some("7".into()));
    state.profile = block_on(load_profile(&api, "7"));
    state.communities = block_on(load_communities(&api, "7"));

    assert_eq!(state.display_name(), "Alice");
    assert_eq!(state.icon(), Some("alice.png"));
    assert_eq!(state.communities.error(), Some("Could not load your communities."));
}

#[test]
fn missing_icon_yields_none() {
    let mut state = NavShellState::for_user(Some("7".into()));
    state.profile = Loadable::Loaded(UserProfile { icon_name: Some(String::new()), ..alice() });
    assert_eq!(state.icon(), None);
}

// =============================================================
// Menus & selection
// =============================================================

#[test]
fn menus_toggle_independently() {
    let mut state = NavShellState::default();
    state.toggle_menu();
    state.toggle_user_menu();
    state.toggle_menu();
    assert!(!state.menu_open);
    assert!(state.user_menu_open);
}

#[test]
fn selecting_community_closes_menus_and_targets_calendar() {
    let mut state = NavShellState::for_user(Some("7".into()));
    state.menu_open = true;
    state.user_menu_open = true;

    assert_eq!(state.select_community("42"), "/community/42/calendar/view");
    assert_eq!(state.selected_community.as_deref(), Some("42"));
    assert!(!state.menu_open && !state.user_menu_open);
}

#[test]
fn menu_entries_follow_selection_and_user() {
    let degraded = NavShellState::default();
    let labels: Vec<_> = degraded.menu_entries().iter().map(|entry| entry.label).collect();
    assert_eq!(labels, ["Create community", "Join community"]);

    let mut state = NavShellState::for_user(Some("7".into()));
    state.select_community("42");
    let entries = state.menu_entries();
    assert_eq!(entries[0], MenuEntry { label: "Calendar", href: "/community/42/calendar/view".into() });
    assert!(entries.iter().any(|entry| entry.href == "/community/42/members"));
    assert!(entries.iter().any(|entry| entry.href == "/user/7/edit"));
    assert_eq!(entries.last().map(|entry| entry.href.as_str()), Some("/auth/logout"));
}

#[test]
fn hrefs_encode_ids_with_reserved_characters() {
    let mut state = NavShellState::for_user(Some("a@b".into()));
    assert_eq!(state.select_community("x/y"), "/community/x%2Fy/calendar/view");
    let entries = state.menu_entries();
    assert!(entries.iter().any(|entry| entry.href == "/community/x%2Fy/members"));
    assert!(entries.iter().any(|entry| entry.href == "/user/a%40b/edit"));
    assert_eq!(user_edit_path("a@b"), "/user/a%40b/edit");
}
