//! Leave-community confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::spawn_load;
use crate::app::AppContext;
use crate::components::status::render_loadable;
use crate::net::types::CommunityDetail;
use crate::state::loadable::Loadable;
use crate::state::nav::calendar_path;
use crate::util::auth::hard_navigate;

#[component]
pub fn CommunityLeavePage(community_id: String) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let navigate = use_navigate();
    let detail = RwSignal::new(Loadable::<CommunityDetail>::Idle);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = context.api.clone();
    let load_id = community_id.clone();
    spawn_load(detail, "Could not load the community.", async move { api.fetch_community(&load_id).await });

    let leave_id = community_id.clone();
    let on_confirm = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let Some(user_id) = context.session.user_id() else {
            error.set("Log in again to leave this community.".to_owned());
            return;
        };
        busy.set(true);
        let api = context.api.clone();
        let community_id = leave_id.clone();
        spawn_local(async move {
            match api.leave_community(&community_id, &user_id).await {
                Ok(()) => {
                    log::info!("left community {community_id}");
                    hard_navigate("/");
                }
                Err(err) => {
                    log::warn!("leaving community failed: {err}");
                    error.set(err.user_message("Could not leave the community."));
                    busy.set(false);
                }
            }
        });
    };
    let cancel_path = calendar_path(&community_id);

    view! {
        <section class="confirm-page">
            {move || {
                render_loadable(detail.get(), |detail: CommunityDetail| {
                    view! { <h1>"Leave \"" {detail.community_name} "\"?"</h1> }
                })
            }}
            <div class="confirm-page__actions">
                <button class="confirm-page__confirm" disabled=move || busy.get() on:click=on_confirm>
                    "Leave"
                </button>
                <button
                    class="confirm-page__cancel"
                    on:click=move |_| navigate(&cancel_path, NavigateOptions::default())
                >
                    "Cancel"
                </button>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
        </section>
    }
}
