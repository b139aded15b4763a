//! Persistent hamburger menu and header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router, outside any guard. Reads the user id from
//! the session store on mount; without one it renders a degraded header with
//! a login link and performs no fetches.
//!
//! DESIGN
//! ======
//! Profile and joined communities are fetched by two independent tasks that
//! each write only their own section of [`NavShellState`]. The selected
//! community is shared with pages through `SelectedCommunity`, never through
//! the session store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::{AppContext, SelectedCommunity};
use crate::components::avatar::Avatar;
use crate::components::status::render_loadable;
use crate::net::types::CommunitySummary;
use crate::state::nav::{NavShellState, load_communities, load_profile, user_edit_path};

#[component]
pub fn NavShell() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let selected = expect_context::<SelectedCommunity>();
    let location = use_location();
    let navigate = use_navigate();
    let state = RwSignal::new(NavShellState::for_user(context.session.user_id()));

    if let Some(user_id) = state.with_untracked(|state| state.user_id.clone()) {
        let api = context.shell_api.clone();
        let profile_user = user_id.clone();
        spawn_local(async move {
            let profile = load_profile(api.as_ref(), &profile_user).await;
            state.try_update(|state| state.profile = profile);
        });
        let api = context.shell_api.clone();
        spawn_local(async move {
            let communities = load_communities(api.as_ref(), &user_id).await;
            state.try_update(|state| state.communities = communities);
        });
    } else {
        log::debug!("nav shell: no stored user, running degraded");
    }

    // Pages bound to a community update the selection too.
    Effect::new(move || {
        let current = selected.0.get();
        state.update(|state| state.selected_community = current);
    });

    // Any navigation closes both menus.
    Effect::new(move || {
        location.pathname.track();
        state.update(NavShellState::close_menus);
    });

    let on_select = Callback::new(move |community_id: String| {
        let path = state.try_update(|state| state.select_community(&community_id));
        selected.0.set(Some(community_id));
        if let Some(path) = path {
            navigate(&path, NavigateOptions::default());
        }
    });

    let icons = context.api.clone();
    let user_icon = Signal::derive(move || state.with(|state| icons.icon_url(state.icon())));

    let menu_entries = move || {
        state
            .with(NavShellState::menu_entries)
            .into_iter()
            .map(|entry| view! { <li><a href=entry.href>{entry.label}</a></li> })
            .collect_view()
    };

    view! {
        <header class="nav-shell">
            <button class="nav-shell__toggle" aria-label="Menu" on:click=move |_| state.update(NavShellState::toggle_menu)>
                "☰"
            </button>
            <a class="nav-shell__brand" href="/">"Community Calendar"</a>
            <Show
                when=move || !state.with(NavShellState::is_degraded)
                fallback=|| view! { <a class="nav-shell__login" href="/auth/login">"Log in"</a> }
            >
                <button class="nav-shell__user" on:click=move |_| state.update(NavShellState::toggle_user_menu)>
                    <Avatar
                        name=Signal::derive(move || state.with(|state| state.display_name().to_owned()))
                        icon=user_icon
                    />
                </button>
            </Show>
        </header>
        <Show when=move || state.with(|state| state.user_menu_open)>
            <div class="nav-shell__user-menu">
                {move || state.with(|state| state.profile.error().map(str::to_owned))}
                <p class="nav-shell__user-name">{move || state.with(|state| state.display_name().to_owned())}</p>
                <a href=move || state.with(|state| state.user_id.as_deref().map(user_edit_path).unwrap_or_default())>
                    "Edit user info"
                </a>
                <a href="/auth/logout">"Logout"</a>
            </div>
        </Show>
        <Show when=move || state.with(|state| state.menu_open)>
            <nav class="nav-shell__menu">
                <Show when=move || !state.with(NavShellState::is_degraded)>
                    <h2>"Communities"</h2>
                    <ul class="nav-shell__communities">
                        <CommunityList state=state on_select=on_select/>
                    </ul>
                </Show>
                <ul class="nav-shell__actions">{menu_entries}</ul>
            </nav>
        </Show>
    }
}

/// Joined communities with the current selection highlighted.
#[component]
fn CommunityList(state: RwSignal<NavShellState>, on_select: Callback<String>) -> impl IntoView {
    let context = expect_context::<AppContext>();

    move || {
        let icons = context.api.clone();
        render_loadable(state.with(|state| state.communities.clone()), move |communities: Vec<CommunitySummary>| {
            if communities.is_empty() {
                return view! { <p class="nav-shell__empty">"No communities yet."</p> }.into_any();
            }
            communities
                .into_iter()
                .map(|community| {
                    let id = community.id.clone();
                    let class = move || {
                        if state.with(|state| state.selected_community.as_deref() == Some(id.as_str())) {
                            "nav-shell__community nav-shell__community--selected"
                        } else {
                            "nav-shell__community"
                        }
                    };
                    let click_id = community.id.clone();
                    let icon = icons.icon_url(community.icon_url.as_deref());
                    view! {
                        <li class=class>
                            <button on:click=move |_| on_select.run(click_id.clone())>
                                <Avatar name=community.name.clone() icon=icon/>
                                <span>{community.name}</span>
                            </button>
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        })
    }
}
