//! Shared auth navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, login and logout pages must agree on where users land
//! and on replacing (not pushing) history entries when access is denied.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::net::types::CommunitySummary;
use crate::state::nav::calendar_path;

/// Options for redirects that must not leave the denied page in history.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Replace the current history entry with the login page.
pub fn redirect_to_login<F>(navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    log::debug!("redirecting to {LOGIN_PATH}");
    navigate(LOGIN_PATH, replace_options());
}

/// Landing page after a successful login: the first joined community's
/// calendar, or home when the user has not joined any.
pub fn post_login_path(communities: &[CommunitySummary]) -> String {
    communities.first().map_or_else(|| "/".to_owned(), |community| calendar_path(&community.id))
}

/// Full page load of `path`, discarding all in-memory state.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            log::warn!("hard navigation to {path} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("hard navigation to {path} skipped outside the browser");
}

/// Full page load of `path` that replaces the current history entry.
pub fn hard_replace(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().replace(path) {
            log::warn!("hard replace to {path} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("hard replace to {path} skipped outside the browser");
}

/// Reload the current page so every mounted component refetches.
pub fn reload_page() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().reload() {
            log::warn!("page reload failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("page reload skipped outside the browser");
}
