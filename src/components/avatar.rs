//! User or community avatar with an initials placeholder.

use leptos::prelude::*;

use crate::util::avatar::initials;

/// Shows `icon` when present; falls back to initials when it is missing or
/// the image fails to load.
#[component]
pub fn Avatar(#[prop(into)] name: Signal<String>, #[prop(into)] icon: Signal<Option<String>>) -> impl IntoView {
    let broken = RwSignal::new(None::<String>);

    move || {
        let src = icon.get().filter(|src| broken.get().as_ref() != Some(src));
        match src {
            Some(src) => {
                let failed_src = src.clone();
                view! {
                    <img
                        class="avatar"
                        src=src
                        alt=move || name.get()
                        on:error=move |_| {
                            log::debug!("avatar image failed to load: {failed_src}");
                            broken.set(Some(failed_src.clone()));
                        }
                    />
                }
                .into_any()
            }
            None => view! { <span class="avatar avatar--initials">{move || initials(&name.get())}</span> }.into_any(),
        }
    }
}
