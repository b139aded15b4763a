//! Post a template tag on a date, and the completion page.

#[cfg(test)]
#[path = "tag_post_test.rs"]
mod tag_post_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::spawn_load;
use super::tags_by_date::post_complete_path;
use crate::app::AppContext;
use crate::components::status::{InlineError, render_loadable};
use crate::net::api::TagPostOutcome;
use crate::net::types::{PostTagRequest, TemplateTag};
use crate::routes::href;
use crate::state::loadable::Loadable;
use crate::util::calendar::is_iso_date;
use crate::util::color::css_color;

pub fn tags_view_path(community_id: &str, date: &str) -> String {
    href("/community/:community_id/calendar/:date/tags/view", &[("community_id", community_id), ("date", date)])
}

/// Request posting `tag` on `date` on behalf of `submitter_id`.
pub fn post_request(tag: &TemplateTag, submitter_id: &str, date: &str) -> PostTagRequest {
    PostTagRequest {
        tag_name: tag.tag.clone(),
        tag_color: tag.color_code.clone(),
        submitter_id: submitter_id.to_owned(),
        date: date.to_owned(),
    }
}

#[component]
pub fn TagPostPage(community_id: String, date: String) -> impl IntoView {
    if !is_iso_date(&date) {
        return view! { <InlineError message="Invalid date. Use YYYY-MM-DD."/> }.into_any();
    }
    let context = expect_context::<AppContext>();
    let navigate = use_navigate();
    let templates = RwSignal::new(Loadable::<Vec<TemplateTag>>::Idle);
    let selected = RwSignal::new(None::<usize>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = context.api.clone();
    let load_community = community_id.clone();
    spawn_load(templates, "Could not load the template tags.", async move {
        api.fetch_template_tags(&load_community).await
    });

    let (submit_community, submit_date) = (community_id.clone(), date.clone());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(tag) = selected
            .get()
            .and_then(|index| templates.with(|templates| templates.loaded().and_then(|tags| tags.get(index).cloned())))
        else {
            error.set("Pick a tag first.".to_owned());
            return;
        };
        let Some(user_id) = context.session.user_id() else {
            error.set("Log in again to post a tag.".to_owned());
            return;
        };
        error.set(String::new());
        busy.set(true);

        let request = post_request(&tag, &user_id, &submit_date);
        let api = context.api.clone();
        let navigate = navigate.clone();
        let community_id = submit_community.clone();
        spawn_local(async move {
            match api.post_tag(&community_id, &request).await {
                Ok(TagPostOutcome::Added) => {
                    navigate(&post_complete_path(&community_id, &request.date), NavigateOptions::default());
                }
                Ok(TagPostOutcome::AlreadyRegistered) => {
                    error.set("You have already posted this tag on this date.".to_owned());
                }
                Err(err) => {
                    log::warn!("posting tag failed: {err}");
                    error.set(err.user_message("Could not add the tag."));
                }
            }
            busy.set(false);
        });
    };

    let options = move |tags: Vec<TemplateTag>| {
        if tags.is_empty() {
            return view! { <p>"This community has no template tags yet."</p> }.into_any();
        }
        tags.into_iter()
            .enumerate()
            .map(|(index, tag)| {
                let style = format!("background-color: {}", css_color(Some(&tag.color_code)));
                view! {
                    <label class="tag-post__option">
                        <input
                            type="radio"
                            name="template-tag"
                            prop:checked=move || selected.get() == Some(index)
                            on:change=move |_| selected.set(Some(index))
                        />
                        <span class="tag-post__swatch" style=style>{tag.tag}</span>
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="tag-post">
            <header class="tag-post__header">
                <span>{date.clone()}</span>
                <a class="tag-post__close" href=tags_view_path(&community_id, &date) aria-label="Close">
                    "×"
                </a>
            </header>
            <h1>"Template tags"</h1>
            <form on:submit=on_submit>
                {move || render_loadable(templates.get(), options.clone())}
                <button type="submit" disabled=move || busy.get()>
                    "Done"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
        </section>
    }
    .into_any()
}

#[component]
pub fn TagPostCompletePage(community_id: String, date: String) -> impl IntoView {
    view! {
        <section class="complete-page">
            <h1>"Tag added"</h1>
            <p>{format!("Your tag for {date} has been posted.")}</p>
            <a href=tags_view_path(&community_id, &date)>"Back to this date"</a>
        </section>
    }
}
