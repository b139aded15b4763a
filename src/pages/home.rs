//! Landing page and catch-all for unknown paths.

use leptos::prelude::*;

use crate::app::AppContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let logged_in = context.session.get().is_some();

    view! {
        <section class="home">
            <h1>"Community Calendar"</h1>
            <p>"Share what your community is up to, one tagged day at a time."</p>
            {if logged_in {
                view! {
                    <p class="home__actions">
                        <a href="/community/create">"Create a community"</a>
                        " or "
                        <a href="/community/join">"join one"</a>
                    </p>
                }
                    .into_any()
            } else {
                view! {
                    <p class="home__actions">
                        <a href="/auth/login">"Log in"</a>
                        " or "
                        <a href="/auth/signup">"sign up"</a>
                    </p>
                }
                    .into_any()
            }}
        </section>
    }
}
