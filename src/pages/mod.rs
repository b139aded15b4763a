//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetches and form state, validates input with plain
//! functions tested alongside it, and renders failures inline through
//! `components::status`.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::error::ApiError;
use crate::state::loadable::Loadable;

pub mod calendar;
pub mod community_create;
pub mod community_join;
pub mod community_leave;
pub mod community_members;
pub mod home;
pub mod login;
pub mod logout;
pub mod signup;
pub mod tag_chat;
pub mod tag_post;
pub mod tags_by_date;
pub mod template_tags;
pub mod user_edit;

/// Run `fetch` in the background, tracking it in `target`.
pub(crate) fn spawn_load<T, F>(target: RwSignal<Loadable<T>>, fallback: &'static str, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Loadable::Loading);
    spawn_local(async move {
        let result = fetch.await;
        if let Err(err) = &result {
            log::warn!("{fallback} ({err})");
        }
        target.try_set(Loadable::from_result(result, fallback));
    });
}
