//! Tags posted on one date.

#[cfg(test)]
#[path = "tags_by_date_test.rs"]
mod tags_by_date_test;

use leptos::prelude::*;

use super::spawn_load;
use crate::app::AppContext;
use crate::components::status::{InlineError, render_loadable};
use crate::net::types::CalendarTag;
use crate::state::loadable::Loadable;
use crate::routes::href;
use crate::state::nav::calendar_path;
use crate::util::calendar::is_iso_date;
use crate::util::color::css_color;
use crate::util::url::encode_segment;

/// Chat page for `tag_id` on `date`.
pub fn chat_path(community_id: &str, tag_id: &str, date: &str) -> String {
    let path = href("/community/:community_id/tag/:tag_id/chat", &[("community_id", community_id), ("tag_id", tag_id)]);
    format!("{path}?date={}", encode_segment(date))
}

pub fn post_path(community_id: &str, date: &str) -> String {
    href("/community/:community_id/calendar/:date/tags/post", &[("community_id", community_id), ("date", date)])
}

pub fn post_complete_path(community_id: &str, date: &str) -> String {
    href(
        "/community/:community_id/calendar/:date/tags/post/complete",
        &[("community_id", community_id), ("date", date)],
    )
}

#[component]
pub fn TagsByDatePage(community_id: String, date: String) -> impl IntoView {
    if !is_iso_date(&date) {
        return view! { <InlineError message="Invalid date. Use YYYY-MM-DD."/> }.into_any();
    }
    let context = expect_context::<AppContext>();
    let tags = RwSignal::new(Loadable::<Vec<CalendarTag>>::Idle);

    let api = context.api.clone();
    let (load_community, load_date) = (community_id.clone(), date.clone());
    spawn_load(tags, "Could not load the tags for this date.", async move {
        api.fetch_tags_by_date(&load_community, &load_date).await
    });

    let list_community = community_id.clone();
    let list_date = date.clone();
    let list = move |tags: Vec<CalendarTag>| {
        if tags.is_empty() {
            return view! { <p class="tags-page__empty">"No tags on this date."</p> }.into_any();
        }
        view! {
            <ul class="tags-page__list">
                {tags
                    .into_iter()
                    .map(|tag| {
                        let style = format!("background-color: {}", css_color(tag.color_code.as_deref()));
                        let label = match &tag.submitter_name {
                            Some(submitter) => format!("{} ({submitter})", tag.tag),
                            None => tag.tag.clone(),
                        };
                        match &tag.id {
                            Some(tag_id) => {
                                view! {
                                    <li class="tags-page__tag" style=style>
                                        <a href=chat_path(&list_community, tag_id, &list_date)>{label}</a>
                                    </li>
                                }
                                    .into_any()
                            }
                            None => view! { <li class="tags-page__tag" style=style>{label}</li> }.into_any(),
                        }
                    })
                    .collect_view()}
            </ul>
        }
            .into_any()
    };

    view! {
        <section class="tags-page">
            <header class="tags-page__header">
                <h1>{date.clone()}</h1>
                <a class="tags-page__close" href=calendar_path(&community_id) aria-label="Back to calendar">
                    "×"
                </a>
            </header>
            {move || render_loadable(tags.get(), list.clone())}
            <a class="tags-page__add" href=post_path(&community_id, &date)>
                "Add a tag"
            </a>
        </section>
    }
    .into_any()
}
