//! Profile editing and its completion page.

#[cfg(test)]
#[path = "user_edit_test.rs"]
mod user_edit_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::spawn_load;
use crate::app::AppContext;
use crate::components::status::{InlineError, render_loadable};
use crate::net::types::{UpdateProfileRequest, UserProfile};
use crate::routes::href;
use crate::state::loadable::Loadable;

pub fn edit_complete_path(user_id: &str) -> String {
    href("/user/:user_id/edit/complete", &[("user_id", user_id)])
}

/// Build the update request. An empty password keeps the current one.
///
/// # Errors
///
/// Returns a message for inline display when the name is empty or the two
/// password fields differ.
pub fn validate_profile_update(name: &str, password: &str, confirm: &str) -> Result<UpdateProfileRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Display name is required.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    let pw = (!password.is_empty()).then(|| password.to_owned());
    Ok(UpdateProfileRequest { name: name.to_owned(), pw })
}

#[component]
pub fn UserEditPage(user_id: String) -> impl IntoView {
    let context = expect_context::<AppContext>();
    if context.session.user_id().as_deref() != Some(user_id.as_str()) {
        return view! { <InlineError message="You can only edit your own profile."/> }.into_any();
    }

    let navigate = use_navigate();
    let profile = RwSignal::new(Loadable::<UserProfile>::Idle);
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = context.api.clone();
    let load_user = user_id.clone();
    spawn_load(profile, "Could not load your profile.", async move { api.fetch_profile(&load_user).await });
    Effect::new(move || {
        if let Some(loaded) = profile.with(|profile| profile.loaded().map(|profile| profile.name.clone())) {
            name.set(loaded);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_profile_update(&name.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let api = context.api.clone();
        let navigate = navigate.clone();
        let user_id = user_id.clone();
        spawn_local(async move {
            match api.update_profile(&user_id, &request).await {
                Ok(()) => navigate(&edit_complete_path(&user_id), NavigateOptions::default()),
                Err(err) => {
                    log::warn!("profile update failed: {err}");
                    error.set(err.user_message("Could not update your profile."));
                    busy.set(false);
                }
            }
        });
    };

    let form = move |_: UserProfile| {
        view! {
            <form class="profile-form" on:submit=on_submit.clone()>
                <label>
                    "Display name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "New password (leave blank to keep)"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm new password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
        }
    };

    view! {
        <section class="profile-page">
            <h1>"Edit user info"</h1>
            {move || render_loadable(profile.get(), form.clone())}
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
        </section>
    }
    .into_any()
}

#[component]
pub fn UserEditCompletePage() -> impl IntoView {
    view! {
        <section class="complete-page">
            <h1>"Profile updated"</h1>
            <p>"Your changes have been saved."</p>
            <a href="/">"Back to home"</a>
        </section>
    }
}
