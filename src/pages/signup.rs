//! Account registration.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppContext;
use crate::config::LOGIN_PATH;
use crate::net::types::RegisterRequest;

/// Build a registration request from raw form input.
///
/// # Errors
///
/// Returns a message for inline display when a field is missing or the email
/// has no `@`.
pub fn validate_signup(email: &str, password: &str, name: &str) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err("Email, password and display name are all required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest { email: email.to_owned(), password: password.to_owned(), name: name.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup(&email.get(), &password.get(), &name.get()) {
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
        spawn_local(async move {
            match api.register(&request).await {
                Ok(_) => {
                    log::info!("registered new account");
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    error.set(err.user_message("Sign-up failed. Please try again."));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Sign up"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Display name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Create account"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
            <p class="auth-page__switch">
                "Already registered? " <a href=LOGIN_PATH>"Log in"</a>
            </p>
        </section>
    }
}
