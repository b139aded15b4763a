//! REST client for the calendar backend.
//!
//! Browser (`csr`): real HTTP via `gloo-net`, each request raced against a
//! `gloo-timers` timeout. Native builds: every call resolves to
//! [`ApiError::Unavailable`] so state machines and pages stay testable.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` and never panic. Some mutation
//! endpoints answer 2xx with `{ "error": ... }`; those are surfaced as
//! [`ApiError::Rejected`] so callers only have one failure path to render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    CalendarEvent, CalendarTag, ChatHistoryResponse, ChatMessage, CommunityDetail, CommunityNameRequest,
    CommunitySummary, JoinedCommunitiesResponse, LeaveCommunityRequest, LoginRequest, LoginResponse,
    LogoutRequest, MembersResponse, MessageResponse, PostChatRequest, PostChatResponse, PostTagRequest,
    RegisterRequest, TagsByDateResponse, TemplateTag, TemplateTagRequest, TemplateTagsResponse,
    UpdateProfileRequest, UserProfile, UserProfileEnvelope, ValidateSessionRequest, ValidateSessionResponse,
};
use super::validator::SessionValidator;
use crate::config::{ApiConfig, Endpoints};
use crate::state::nav::NavShellApi;
use crate::state::session::Session;

/// Message the tag endpoint returns (with a 2xx) when the same submitter has
/// already posted this tag on this date.
pub const TAG_ALREADY_REGISTERED: &str = "指定された日付、登録者のタグは既に登録されています";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Result of posting a template tag on a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagPostOutcome {
    Added,
    AlreadyRegistered,
}

/// Absolute URL plus the query pairs the transport appends to it.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Target {
    url: String,
    query: Vec<(&'static str, String)>,
}

impl Target {
    fn with_query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }
}

/// Typed wrapper over every backend endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, template: &str, params: &[(&str, &str)]) -> Target {
        Target { url: self.config.url(&Endpoints::render(template, params)), query: Vec::new() }
    }

    // =============================================================
    // Transport
    // =============================================================

    /// Send a request and return the raw body of a 2xx response.
    async fn send(&self, method: Method, target: &Target, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = target.url.as_str();
            let builder = match method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Put => Request::put(url),
                Method::Delete => Request::delete(url),
            }
            .query(target.query.iter().map(|(name, value)| (*name, value.as_str())));
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|err| ApiError::Transport(err.to_string()))?;

            let response = with_timeout(request.send(), self.config.request_timeout_ms)
                .await?
                .map_err(|err| ApiError::Transport(err.to_string()))?;
            let status = response.status();
            let text = response.text().await.map_err(|err| ApiError::Transport(err.to_string()))?;
            if !response.ok() {
                log::warn!("{method:?} {url} -> {status}");
                return Err(status_error(status, &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, target, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        target: &Target,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let text = self.send(method, target, body).await?;
        decode(&text)
    }

    /// Mutation whose 2xx body is an optional `{ message?, error? }`.
    async fn mutate(&self, method: Method, target: &Target, body: serde_json::Value) -> Result<Option<String>, ApiError> {
        let text = self.send(method, target, Some(body)).await?;
        message_outcome(&text)
    }

    // =============================================================
    // Auth
    // =============================================================

    /// `POST` the session pair to the validation endpoint.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures, including a body without
    /// `valid`.
    pub async fn validate_session(&self, session: &Session) -> Result<bool, ApiError> {
        let request = ValidateSessionRequest { user_id: session.user_id.clone(), sid: session.session_id.clone() };
        let target = self.endpoint(&self.config.endpoints.validate_session, &[]);
        let response: ValidateSessionResponse = self.fetch_json(Method::Post, &target, Some(encode(&request)?)).await?;
        Ok(response.valid)
    }

    /// # Errors
    ///
    /// Any failure; a rejected login arrives as a non-2xx [`ApiError::Status`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest { email: email.to_owned(), pw: password.to_owned() };
        let target = self.endpoint(&self.config.endpoints.login, &[]);
        let response: LoginResponse = self.fetch_json(Method::Post, &target, Some(encode(&request)?)).await?;
        Ok(Session::new(response.sid, response.user_id))
    }

    /// # Errors
    ///
    /// Any failure; the caller keeps the local session in that case.
    pub async fn logout(&self, session_id: &str) -> Result<(), ApiError> {
        let request = LogoutRequest { sid: session_id.to_owned() };
        let target = self.endpoint(&self.config.endpoints.logout, &[]);
        self.send(Method::Delete, &target, Some(encode(&request)?)).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Any failure, or [`ApiError::Rejected`] when the body carries `error`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
        let target = self.endpoint(&self.config.endpoints.register, &[]);
        self.mutate(Method::Post, &target, encode(request)?).await
    }

    // =============================================================
    // Users
    // =============================================================

    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let target = self.endpoint(&self.config.endpoints.user_profile, &[("user_id", user_id)]);
        let envelope: UserProfileEnvelope = self.fetch_json(Method::Get, &target, None).await?;
        Ok(envelope.user_data)
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn update_profile(&self, user_id: &str, request: &UpdateProfileRequest) -> Result<(), ApiError> {
        let target = self.endpoint(&self.config.endpoints.user_update, &[("user_id", user_id)]);
        self.mutate(Method::Put, &target, encode(request)?).await.map(|_| ())
    }

    // =============================================================
    // Communities
    // =============================================================

    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_joined_communities(&self, user_id: &str) -> Result<Vec<CommunitySummary>, ApiError> {
        let target = self.joined_communities_url(user_id);
        let response: JoinedCommunitiesResponse = self.fetch_json(Method::Get, &target, None).await?;
        Ok(response.communities)
    }

    fn joined_communities_url(&self, user_id: &str) -> Target {
        self.endpoint(&self.config.endpoints.joined_communities, &[]).with_query("user_id", user_id)
    }

    /// # Errors
    ///
    /// Any failure; a missing community is a 404 [`ApiError::Status`].
    pub async fn fetch_community(&self, community_id: &str) -> Result<CommunityDetail, ApiError> {
        let target = self.endpoint(&self.config.endpoints.community_detail, &[("community_id", community_id)]);
        self.fetch_json(Method::Get, &target, None).await
    }

    /// # Errors
    ///
    /// Any failure, or [`ApiError::Rejected`] when the name is refused.
    pub async fn create_community(&self, name: &str, user_id: &str) -> Result<Option<String>, ApiError> {
        let request = CommunityNameRequest { community_name: name.to_owned(), user_id: user_id.to_owned() };
        let target = self.endpoint(&self.config.endpoints.community_create, &[]);
        self.mutate(Method::Post, &target, encode(&request)?).await
    }

    /// # Errors
    ///
    /// Any failure, or [`ApiError::Rejected`] for an unknown community.
    pub async fn join_community(&self, name: &str, user_id: &str) -> Result<Option<String>, ApiError> {
        let request = CommunityNameRequest { community_name: name.to_owned(), user_id: user_id.to_owned() };
        let target = self.endpoint(&self.config.endpoints.community_join, &[]);
        self.mutate(Method::Post, &target, encode(&request)?).await
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn leave_community(&self, community_id: &str, user_id: &str) -> Result<(), ApiError> {
        let request = LeaveCommunityRequest { community_id: community_id.to_owned(), user_id: user_id.to_owned() };
        let target = self.endpoint(&self.config.endpoints.community_leave, &[]);
        self.mutate(Method::Post, &target, encode(&request)?).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_member_ids(&self, community_id: &str) -> Result<Vec<String>, ApiError> {
        let target = self.endpoint(&self.config.endpoints.community_members, &[]).with_query("community_id", community_id);
        let response: MembersResponse = self.fetch_json(Method::Get, &target, None).await?;
        Ok(response.members)
    }

    // =============================================================
    // Calendar & tags
    // =============================================================

    /// Events of every community `user_id` belongs to for one month.
    ///
    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_calendar_month(&self, user_id: &str, year: i32, month: u32) -> Result<Vec<CalendarEvent>, ApiError> {
        let target = self.calendar_month_url(user_id, year, month);
        self.fetch_json(Method::Get, &target, None).await
    }

    fn calendar_month_url(&self, user_id: &str, year: i32, month: u32) -> Target {
        self.endpoint(&self.config.endpoints.calendar_month, &[("user_id", user_id)])
            .with_query("year", year.to_string())
            .with_query("month", month.to_string())
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_tags_by_date(&self, community_id: &str, date: &str) -> Result<Vec<CalendarTag>, ApiError> {
        let target = self
            .endpoint(&self.config.endpoints.tags_by_date, &[("community_id", community_id)])
            .with_query("date", date);
        let response: TagsByDateResponse = self.fetch_json(Method::Get, &target, None).await?;
        Ok(response.data)
    }

    /// # Errors
    ///
    /// Any failure, or [`ApiError::Rejected`] when the body carries `error`.
    pub async fn post_tag(&self, community_id: &str, request: &PostTagRequest) -> Result<TagPostOutcome, ApiError> {
        let target = self.endpoint(&self.config.endpoints.tag_add, &[("community_id", community_id)]);
        let message = self.mutate(Method::Post, &target, encode(request)?).await?;
        Ok(tag_post_outcome(message.as_deref()))
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_template_tags(&self, community_id: &str) -> Result<Vec<TemplateTag>, ApiError> {
        let target = self.endpoint(&self.config.endpoints.template_tags, &[("community_id", community_id)]);
        let response: TemplateTagsResponse = self.fetch_json(Method::Get, &target, None).await?;
        Ok(response.template_tags)
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_template_tag(&self, community_id: &str, tag_id: &str) -> Result<TemplateTag, ApiError> {
        let target = self.endpoint(
            &self.config.endpoints.template_tag,
            &[("community_id", community_id), ("tag_id", tag_id)],
        );
        self.fetch_json(Method::Get, &target, None).await
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn create_template_tag(&self, community_id: &str, request: &TemplateTagRequest) -> Result<(), ApiError> {
        let target = self.endpoint(&self.config.endpoints.template_tags, &[("community_id", community_id)]);
        self.mutate(Method::Post, &target, encode(request)?).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn update_template_tag(
        &self,
        community_id: &str,
        tag_id: &str,
        request: &TemplateTagRequest,
    ) -> Result<(), ApiError> {
        let target = self.endpoint(
            &self.config.endpoints.template_tag,
            &[("community_id", community_id), ("tag_id", tag_id)],
        );
        self.mutate(Method::Put, &target, encode(request)?).await.map(|_| ())
    }

    // =============================================================
    // Chat
    // =============================================================

    /// # Errors
    ///
    /// Any failure.
    pub async fn fetch_chat_history(&self, community_id: &str, tag_id: &str, date: &str) -> Result<Vec<ChatMessage>, ApiError> {
        let target = self.chat_url(community_id, tag_id, Some(date));
        let response: ChatHistoryResponse = self.fetch_json(Method::Get, &target, None).await?;
        Ok(response.chat_history)
    }

    /// # Errors
    ///
    /// Any failure.
    pub async fn post_chat(&self, community_id: &str, tag_id: &str, request: &PostChatRequest) -> Result<ChatMessage, ApiError> {
        let target = self.chat_url(community_id, tag_id, None);
        let response: PostChatResponse = self.fetch_json(Method::Post, &target, Some(encode(request)?)).await?;
        Ok(response.new_message)
    }

    fn chat_url(&self, community_id: &str, tag_id: &str, date: Option<&str>) -> Target {
        let target =
            self.endpoint(&self.config.endpoints.tag_chat, &[("community_id", community_id), ("tag_id", tag_id)]);
        match date {
            Some(date) => target.with_query("date", date),
            None => target,
        }
    }

    /// Where to load `icon` from; see [`ApiConfig::icon_url`].
    pub fn icon_url(&self, icon: Option<&str>) -> Option<String> {
        self.config.icon_url(icon)
    }
}

#[async_trait(?Send)]
impl SessionValidator for ApiClient {
    async fn check(&self, session: &Session) -> Result<bool, ApiError> {
        self.validate_session(session).await
    }
}

#[async_trait(?Send)]
impl NavShellApi for ApiClient {
    async fn profile(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.fetch_profile(user_id).await
    }

    async fn joined_communities(&self, user_id: &str) -> Result<Vec<CommunitySummary>, ApiError> {
        self.fetch_joined_communities(user_id).await
    }
}

// =============================================================
// Body helpers
// =============================================================

fn encode<T: Serialize>(request: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(request).map_err(|err| ApiError::Transport(format!("encode request: {err}")))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Interpret an optional `{ message?, error? }` success body.
fn message_outcome(body: &str) -> Result<Option<String>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let Ok(parsed) = serde_json::from_str::<MessageResponse>(body) else {
        return Ok(None);
    };
    if let Some(error) = parsed.error.filter(|error| !error.trim().is_empty()) {
        return Err(ApiError::Rejected(error));
    }
    Ok(parsed.message.filter(|message| !message.trim().is_empty()))
}

/// Build the error for a non-2xx response, keeping any server explanation.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|parsed| parsed.text().map(str::to_owned));
    ApiError::Status { status, message }
}

fn tag_post_outcome(message: Option<&str>) -> TagPostOutcome {
    if message.is_some_and(|message| message.trim() == TAG_ALREADY_REGISTERED) {
        TagPostOutcome::AlreadyRegistered
    } else {
        TagPostOutcome::Added
    }
}

#[cfg(feature = "csr")]
async fn with_timeout<F: std::future::Future>(future: F, timeout_ms: u32) -> Result<F::Output, ApiError> {
    use futures::future::{Either, select};

    let future = std::pin::pin!(future);
    let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(future, timeout).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(ApiError::Transport(format!("timed out after {timeout_ms} ms"))),
    }
}
