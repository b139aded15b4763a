//! Navigation shell state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell is mounted once around every route and is not guarded. With no
//! stored user id it runs degraded: no personalisation and no fetches. With
//! one, profile and joined communities load independently so one failing
//! endpoint never blanks the other section.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use async_trait::async_trait;

use super::loadable::Loadable;
use crate::net::error::ApiError;
use crate::net::types::{CommunitySummary, UserProfile};
use crate::routes::href;

/// Backend calls the shell needs.
#[async_trait(?Send)]
pub trait NavShellApi: Send + Sync {
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    async fn profile(&self, user_id: &str) -> Result<UserProfile, ApiError>;

    /// # Errors
    ///
    /// Any transport, status or decode failure.
    async fn joined_communities(&self, user_id: &str) -> Result<Vec<CommunitySummary>, ApiError>;
}

/// One entry of the hamburger menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavShellState {
    pub menu_open: bool,
    pub user_menu_open: bool,
    pub user_id: Option<String>,
    pub profile: Loadable<UserProfile>,
    pub communities: Loadable<Vec<CommunitySummary>>,
    pub selected_community: Option<String>,
}

impl NavShellState {
    /// Initial state on mount. Both sections start loading only when a user
    /// id is known.
    pub fn for_user(user_id: Option<String>) -> Self {
        let user_id = user_id.filter(|id| !id.trim().is_empty());
        let (profile, communities) = if user_id.is_some() {
            (Loadable::Loading, Loadable::Loading)
        } else {
            (Loadable::Idle, Loadable::Idle)
        };
        Self { user_id, profile, communities, ..Self::default() }
    }

    pub fn is_degraded(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn close_menus(&mut self) {
        self.menu_open = false;
        self.user_menu_open = false;
    }

    /// Select `community_id`, close both menus and return the calendar path
    /// to navigate to.
    pub fn select_community(&mut self, community_id: &str) -> String {
        self.selected_community = Some(community_id.to_owned());
        self.close_menus();
        calendar_path(community_id)
    }

    /// Name shown in the header; empty until the profile arrives.
    pub fn display_name(&self) -> &str {
        self.profile.loaded().map_or("", |profile| profile.name.as_str())
    }

    pub fn icon(&self) -> Option<&str> {
        self.profile.loaded().and_then(|profile| profile.icon_name.as_deref()).filter(|icon| !icon.is_empty())
    }

    /// Menu entries for the current user and selection.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        let mut entries = Vec::new();
        if let Some(community_id) = &self.selected_community {
            let community = |pattern: &str| href(pattern, &[("community_id", community_id)]);
            entries.push(MenuEntry { label: "Calendar", href: calendar_path(community_id) });
            entries.push(MenuEntry { label: "Members", href: community("/community/:community_id/members") });
            entries.push(MenuEntry { label: "Template tags", href: community("/community/:community_id/template_tags") });
            entries.push(MenuEntry { label: "Leave community", href: community("/community/:community_id/leave") });
        }
        entries.push(MenuEntry { label: "Create community", href: "/community/create".to_owned() });
        entries.push(MenuEntry { label: "Join community", href: "/community/join".to_owned() });
        if let Some(user_id) = &self.user_id {
            entries.push(MenuEntry { label: "Edit user info", href: user_edit_path(user_id) });
            entries.push(MenuEntry { label: "Logout", href: "/auth/logout".to_owned() });
        }
        entries
    }
}

pub fn calendar_path(community_id: &str) -> String {
    href("/community/:community_id/calendar/view", &[("community_id", community_id)])
}

pub fn user_edit_path(user_id: &str) -> String {
    href("/user/:user_id/edit", &[("user_id", user_id)])
}

pub async fn load_profile(api: &dyn NavShellApi, user_id: &str) -> Loadable<UserProfile> {
    match api.profile(user_id).await {
        Ok(profile) => Loadable::Loaded(profile),
        Err(err) => {
            log::warn!("nav shell: profile fetch failed: {err}");
            Loadable::Failed("Could not load your profile.".to_owned())
        }
    }
}

pub async fn load_communities(api: &dyn NavShellApi, user_id: &str) -> Loadable<Vec<CommunitySummary>> {
    match api.joined_communities(user_id).await {
        Ok(communities) => Loadable::Loaded(communities),
        Err(err) => {
            log::warn!("nav shell: joined communities fetch failed: {err}");
            Loadable::Failed("Could not load your communities.".to_owned())
        }
    }
}
