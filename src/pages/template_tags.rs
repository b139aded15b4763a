//! Community template tags: list, create and edit.

#[cfg(test)]
#[path = "template_tags_test.rs"]
mod template_tags_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::spawn_load;
use crate::app::AppContext;
use crate::components::status::render_loadable;
use crate::net::error::ApiError;
use crate::net::types::{TemplateTag, TemplateTagRequest};
use crate::routes::href;
use crate::state::loadable::Loadable;
use crate::state::nav::calendar_path;
use crate::util::color::{css_color, validate_color_code};

pub const DEFAULT_TEMPLATE_COLOR: &str = "#4a90d9";

pub fn list_path(community_id: &str) -> String {
    href("/community/:community_id/template_tags", &[("community_id", community_id)])
}

pub fn create_path(community_id: &str) -> String {
    href("/community/:community_id/template_tags/create", &[("community_id", community_id)])
}

pub fn edit_path(community_id: &str, tag_id: &str) -> String {
    href("/community/:community_id/template_tags/:tag_id/edit", &[("community_id", community_id), ("tag_id", tag_id)])
}

/// Build a create/update request from form input.
///
/// # Errors
///
/// Returns a message for inline display when the name is blank or the colour
/// is not `#RRGGBB`.
pub fn validate_template_tag(name: &str, color: &str) -> Result<TemplateTagRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Tag name is required.");
    }
    let color_code = validate_color_code(color)?;
    Ok(TemplateTagRequest { tag_name: name.to_owned(), color_code })
}

#[component]
pub fn TemplateTagListPage(community_id: String) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let tags = RwSignal::new(Loadable::<Vec<TemplateTag>>::Idle);

    let api = context.api.clone();
    let load_community = community_id.clone();
    spawn_load(tags, "Could not load the template tags.", async move {
        api.fetch_template_tags(&load_community).await
    });

    let list_community = community_id.clone();
    let list = move |tags: Vec<TemplateTag>| {
        if tags.is_empty() {
            return view! { <p>"No template tags yet."</p> }.into_any();
        }
        view! {
            <ul class="template-tags__list">
                {tags
                    .into_iter()
                    .map(|tag| {
                        let style = format!("background-color: {}", css_color(Some(&tag.color_code)));
                        let edit = tag.id.as_deref().map(|tag_id| {
                            view! { <a href=edit_path(&list_community, tag_id)>"Edit"</a> }
                        });
                        view! {
                            <li class="template-tags__item">
                                <span class="template-tags__swatch" style=style>{tag.tag}</span>
                                {edit}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="template-tags">
            <header class="template-tags__header">
                <h1>"Template tags"</h1>
                <a href=calendar_path(&community_id)>"Back to calendar"</a>
            </header>
            {move || render_loadable(tags.get(), list.clone())}
            <a class="template-tags__create" href=create_path(&community_id)>
                "New template tag"
            </a>
        </section>
    }
}

#[component]
pub fn TemplateTagCreatePage(community_id: String) -> impl IntoView {
    view! { <TemplateTagForm community_id=community_id tag_id=None/> }
}

#[component]
pub fn TemplateTagEditPage(community_id: String, tag_id: String) -> impl IntoView {
    view! { <TemplateTagForm community_id=community_id tag_id=Some(tag_id)/> }
}

/// Shared form; `tag_id` switches between create and update.
#[component]
fn TemplateTagForm(community_id: String, tag_id: Option<String>) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let color = RwSignal::new(DEFAULT_TEMPLATE_COLOR.to_owned());
    let existing = RwSignal::new(Loadable::<TemplateTag>::Idle);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let editing = tag_id.is_some();

    if let Some(tag_id) = tag_id.clone() {
        let api = context.api.clone();
        let load_community = community_id.clone();
        spawn_load(existing, "Could not load this template tag.", async move {
            api.fetch_template_tag(&load_community, &tag_id).await.map_err(|err| {
                if err.is_not_found() {
                    ApiError::Rejected("This template tag no longer exists.".to_owned())
                } else {
                    err
                }
            })
        });
        Effect::new(move || {
            if let Some(tag) = existing.with(|existing| existing.loaded().cloned()) {
                name.set(tag.tag);
                color.set(tag.color_code);
            }
        });
    }

    let submit_community = community_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_template_tag(&name.get(), &color.get()) {
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
        let community_id = submit_community.clone();
        let tag_id = tag_id.clone();
        spawn_local(async move {
            let result: Result<(), ApiError> = match &tag_id {
                Some(tag_id) => api.update_template_tag(&community_id, tag_id, &request).await,
                None => api.create_template_tag(&community_id, &request).await,
            };
            match result {
                Ok(()) => navigate(&list_path(&community_id), NavigateOptions::default()),
                Err(err) => {
                    log::warn!("saving template tag failed: {err}");
                    error.set(err.user_message("Could not save the template tag."));
                    busy.set(false);
                }
            }
        });
    };

    let title = if editing { "Edit template tag" } else { "New template tag" };
    view! {
        <section class="template-tag-form">
            <h1>{title}</h1>
            {move || render_loadable(existing.get(), |_| ())}
            <form on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Colour"
                    <input
                        type="color"
                        prop:value=move || color.get()
                        on:input=move |ev| color.set(event_target_value(&ev))
                    />
                </label>
                <span
                    class="template-tag-form__preview"
                    style=move || format!("background-color: {}", css_color(Some(&color.get())))
                >
                    {move || name.get()}
                </span>
                <button type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
            <a href=list_path(&community_id)>"Cancel"</a>
        </section>
    }
}
