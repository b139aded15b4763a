//! Logout confirmation.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppContext;
use crate::config::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::util::auth::hard_replace;

/// Drop the local session after the backend accepted the logout.
///
/// # Errors
///
/// Returns a message for inline display when the cookies could not be
/// removed; the session is then still in place.
pub fn finish_logout(store: &dyn SessionStore) -> Result<(), &'static str> {
    store.clear().map_err(|err| {
        log::error!("could not clear session: {err}");
        "Logged out on the server, but the local session could not be cleared."
    })
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let navigate = use_navigate();
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_confirm = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let context = context.clone();
        spawn_local(async move {
            let Some(session) = context.session.get() else {
                hard_replace(LOGIN_PATH);
                return;
            };
            if let Err(err) = context.api.logout(&session.session_id).await {
                log::warn!("logout failed: {err}");
                error.set(err.user_message("Logout failed. Please try again."));
                busy.set(false);
                return;
            }
            match finish_logout(context.session.as_ref()) {
                Ok(()) => {
                    log::info!("logged out user {}", session.user_id);
                    hard_replace(LOGIN_PATH);
                }
                Err(message) => {
                    error.set(message.to_owned());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="confirm-page">
            <h1>"Log out?"</h1>
            <div class="confirm-page__actions">
                <button class="confirm-page__confirm" disabled=move || busy.get() on:click=on_confirm>
                    "Log out"
                </button>
                <button class="confirm-page__cancel" on:click=move |_| navigate("/", NavigateOptions::default())>
                    "Cancel"
                </button>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
        </section>
    }
}
