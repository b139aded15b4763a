//! Per-tag chat for one date.

#[cfg(test)]
#[path = "tag_chat_test.rs"]
mod tag_chat_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use super::spawn_load;
use super::tag_post::tags_view_path;
use crate::app::AppContext;
use crate::components::status::{InlineError, render_loadable};
use crate::net::types::{ChatMessage, PostChatRequest};
use crate::state::loadable::Loadable;
use crate::util::calendar::is_iso_date;

pub const MAX_CHAT_MESSAGE_CHARS: usize = 200;

/// Trimmed message ready to send.
///
/// # Errors
///
/// Returns a message for inline display when the text is blank or too long.
pub fn validate_chat_message(raw: &str) -> Result<String, &'static str> {
    let message = raw.trim();
    if message.is_empty() {
        return Err("Message cannot be empty.");
    }
    if message.chars().count() > MAX_CHAT_MESSAGE_CHARS {
        return Err("Message must be 200 characters or fewer.");
    }
    Ok(message.to_owned())
}

pub fn message_class(message: &ChatMessage, own_user_id: Option<&str>) -> &'static str {
    if own_user_id == Some(message.sender_id.as_str()) {
        "chat__message chat__message--own"
    } else {
        "chat__message"
    }
}

fn sender_label(message: &ChatMessage) -> String {
    message.sender_name.clone().unwrap_or_else(|| message.sender_id.clone())
}

#[component]
pub fn TagChatPage(community_id: String, tag_id: String) -> impl IntoView {
    let query = use_query_map();
    let date = query.with_untracked(|query| query.get("date")).unwrap_or_default();
    if !is_iso_date(&date) {
        return view! { <InlineError message="Invalid date. Use YYYY-MM-DD."/> }.into_any();
    }

    let context = expect_context::<AppContext>();
    let own_user_id = context.session.user_id();
    let history = RwSignal::new(Loadable::<Vec<ChatMessage>>::Idle);
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = context.api.clone();
    let (load_community, load_tag, load_date) = (community_id.clone(), tag_id.clone(), date.clone());
    spawn_load(history, "Could not load the chat history.", async move {
        api.fetch_chat_history(&load_community, &load_tag, &load_date).await
    });

    let (send_community, send_tag, send_date) = (community_id.clone(), tag_id, date.clone());
    let sender_id = own_user_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let message = match validate_chat_message(&draft.get()) {
            Ok(message) => message,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let Some(sender_id) = sender_id.clone() else {
            error.set("Log in again to send messages.".to_owned());
            return;
        };
        error.set(String::new());
        busy.set(true);

        let request = PostChatRequest { date: send_date.clone(), message, sender_id };
        let api = context.api.clone();
        let (community_id, tag_id) = (send_community.clone(), send_tag.clone());
        spawn_local(async move {
            match api.post_chat(&community_id, &tag_id, &request).await {
                Ok(sent) => {
                    history.update(|history| {
                        if let Loadable::Loaded(messages) = history {
                            messages.push(sent);
                        } else {
                            *history = Loadable::Loaded(vec![sent]);
                        }
                    });
                    draft.set(String::new());
                }
                Err(err) => {
                    log::warn!("sending chat message failed: {err}");
                    error.set(err.user_message("Could not send the message."));
                }
            }
            busy.set(false);
        });
    };

    let messages = move |messages: Vec<ChatMessage>| {
        if messages.is_empty() {
            return view! { <p class="chat__empty">"No messages yet."</p> }.into_any();
        }
        view! {
            <ul class="chat__messages">
                {messages
                    .into_iter()
                    .map(|message| {
                        let class = message_class(&message, own_user_id.as_deref());
                        view! {
                            <li class=class>
                                <span class="chat__sender">{sender_label(&message)}</span>
                                <p class="chat__body">{message.message_content}</p>
                                <time class="chat__time">{message.timestamp.unwrap_or_default()}</time>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="chat">
            <header class="chat__header">
                <span>{date.clone()}</span>
                <a class="chat__close" href=tags_view_path(&community_id, &date) aria-label="Close">
                    "×"
                </a>
            </header>
            {move || render_loadable(history.get(), messages.clone())}
            <form class="chat__form" on:submit=on_submit>
                <input
                    type="text"
                    maxlength=MAX_CHAT_MESSAGE_CHARS.to_string()
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    "Send"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="status status--error" role="alert">{move || error.get()}</p>
            </Show>
        </section>
    }
    .into_any()
}
