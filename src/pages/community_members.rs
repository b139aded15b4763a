//! Member list of one community.
//!
//! Member ids come back as a bare list and are resolved to profiles
//! concurrently; a profile that fails to load becomes a placeholder row
//! instead of failing the whole list.

#[cfg(test)]
#[path = "community_members_test.rs"]
mod community_members_test;

use futures::future::join_all;
use leptos::prelude::*;

use super::spawn_load;
use crate::app::AppContext;
use crate::config::ApiConfig;
use crate::components::avatar::Avatar;
use crate::components::status::render_loadable;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::state::loadable::Loadable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRow {
    pub user_id: String,
    pub name: String,
    pub icon: Option<String>,
}

/// Row for one member, with an "Unknown user" placeholder on failure. The
/// stored icon name is resolved to a loadable URL through `config`.
pub fn member_row(config: &ApiConfig, user_id: String, profile: Result<UserProfile, ApiError>) -> MemberRow {
    match profile {
        Ok(profile) => {
            let icon = config.icon_url(profile.icon_name.as_deref());
            MemberRow { user_id, name: profile.name, icon }
        }
        Err(err) => {
            log::warn!("member {user_id} profile unavailable: {err}");
            MemberRow { name: format!("Unknown user ({user_id})"), user_id, icon: None }
        }
    }
}

async fn load_members(api: &ApiClient, community_id: &str) -> Result<Vec<MemberRow>, ApiError> {
    let ids = api.fetch_member_ids(community_id).await?;
    let profiles = join_all(ids.iter().map(|id| api.fetch_profile(id))).await;
    Ok(ids.into_iter().zip(profiles).map(|(id, profile)| member_row(api.config(), id, profile)).collect())
}

#[component]
pub fn CommunityMembersPage(community_id: String) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let members = RwSignal::new(Loadable::<Vec<MemberRow>>::Idle);

    let api = context.api.clone();
    spawn_load(members, "Could not load the member list.", async move { load_members(&api, &community_id).await });

    view! {
        <section class="members-page">
            <h1>"Members"</h1>
            {move || {
                render_loadable(members.get(), |rows: Vec<MemberRow>| {
                    if rows.is_empty() {
                        return view! { <p>"No members yet."</p> }.into_any();
                    }
                    view! {
                        <ul class="members-page__list">
                            {rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <li class="members-page__member">
                                            <Avatar name=row.name.clone() icon=row.icon/>
                                            <span>{row.name}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                })
            }}
        </section>
    }
}
