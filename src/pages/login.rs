//! Email + password login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::util::auth::{hard_navigate, post_login_path};

/// Shown for every rejected login so the response never reveals which field
/// was wrong.
pub const LOGIN_FAILED: &str = "Login failed. Check your email address and password.";

/// Trim and require both credentials.
///
/// # Errors
///
/// Returns a message for inline display when either field is empty.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let context = context.clone();
        spawn_local(async move {
            let session = match context.api.login(&email_value, &password_value).await {
                Ok(session) => session,
                Err(err) => {
                    log::warn!("login rejected: {err}");
                    error.set(LOGIN_FAILED.to_owned());
                    busy.set(false);
                    return;
                }
            };
            if let Err(err) = context.session.set(&session) {
                log::error!("could not persist session: {err}");
                error.set("Logged in, but the session could not be saved. Check that cookies are enabled.".to_owned());
                busy.set(false);
                return;
            }
            log::info!("logged in as user {}", session.user_id);
            let communities = context.api.fetch_joined_communities(&session.user_id).await.unwrap_or_else(|err| {
                log::warn!("joined communities unavailable after login: {err}");
                Vec::new()
            });
            hard_navigate(&post_login_path(&communities));
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Log in"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
            <p class="auth-page__switch">
                "No account yet? " <a href="/auth/signup">"Sign up"</a>
            </p>
        </section>
    }
}
