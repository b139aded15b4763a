//! Loading and inline message views shared by every page.

use leptos::prelude::*;

use crate::state::loadable::Loadable;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! { <p class="status status--loading">"Loading..."</p> }
}

#[component]
pub fn InlineError(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="status status--error" role="alert">{message}</p> }
}

/// Green confirmation line; renders nothing while `message` is empty.
#[component]
pub fn InlineNotice(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="status status--notice">{move || message.get()}</p>
        </Show>
    }
}

/// Render `loadable` with the shared loading and error views, delegating the
/// loaded value to `view`.
pub fn render_loadable<T, F, V>(loadable: Loadable<T>, view: F) -> AnyView
where
    F: FnOnce(T) -> V,
    V: IntoView + 'static,
{
    match loadable {
        Loadable::Idle => ().into_any(),
        Loadable::Loading => view! { <LoadingIndicator/> }.into_any(),
        Loadable::Failed(message) => view! { <InlineError message=message/> }.into_any(),
        Loadable::Loaded(value) => view(value).into_any(),
    }
}
