//! Join an existing community by name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::community_create::validate_community_name;
use crate::app::AppContext;
use crate::components::status::InlineNotice;
use crate::util::auth::reload_page;

#[component]
pub fn CommunityJoinPage() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let community_name = match validate_community_name(&name.get()) {
            Ok(community_name) => community_name,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let Some(user_id) = context.session.user_id() else {
            error.set("Log in again to join a community.".to_owned());
            return;
        };
        error.set(String::new());
        notice.set(String::new());
        busy.set(true);

        let api = context.api.clone();
        spawn_local(async move {
            match api.join_community(&community_name, &user_id).await {
                Ok(message) => {
                    log::info!("joined community {community_name}");
                    notice.set(message.unwrap_or_else(|| format!("Joined \"{community_name}\".")));
                }
                Err(err) => {
                    log::warn!("joining community failed: {err}");
                    error.set(err.user_message("Could not join the community."));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="community-form-page">
            <h1>"Join a community"</h1>
            <form class="community-form" on:submit=on_submit>
                <input
                    type="text"
                    maxlength="16"
                    placeholder="Community name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    "Join"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
            <InlineNotice message=notice/>
            <Show when=move || !notice.get().is_empty()>
                <button class="community-form-page__continue" on:click=move |_| reload_page()>
                    "Continue"
                </button>
            </Show>
        </section>
    }
}
