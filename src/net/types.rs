//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! The backend grew across several iterations, so identifiers arrive as either
//! strings or integers and a few fields have two spellings. Deserialization
//! normalizes both here; the rest of the client only ever sees `String` ids.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidateSessionRequest {
    pub user_id: String,
    pub sid: String,
}

/// Validation verdict. `valid` is required: a body without it is malformed
/// and therefore treated as a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ValidateSessionResponse {
    pub valid: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub pw: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub sid: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogoutRequest {
    pub sid: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Generic `{ message?, error? }` body used by mutation endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MessageResponse {
    /// The most specific human-readable text in the body, if any.
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

// =============================================================
// Users
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    #[serde(alias = "user_name")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Icon URL or stored file name, whichever the backend returns.
    #[serde(default, alias = "icon_url", alias = "user_icon_url")]
    pub icon_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserProfileEnvelope {
    pub user_data: UserProfile,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw: Option<String>,
}

// =============================================================
// Communities
// =============================================================

/// Entry of the navigation shell's community switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "community_name")]
    pub name: String,
    #[serde(default, rename = "iconUrl", alias = "icon_url")]
    pub icon_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct JoinedCommunitiesResponse {
    #[serde(default)]
    pub communities: Vec<CommunitySummary>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CommunityDetail {
    #[serde(alias = "name")]
    pub community_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommunityNameRequest {
    pub community_name: String,
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaveCommunityRequest {
    pub community_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MembersResponse {
    #[serde(default, deserialize_with = "deserialize_id_list")]
    pub members: Vec<String>,
}

// =============================================================
// Calendar & tags
// =============================================================

/// One tagged date in the monthly calendar feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: String,
    #[serde(alias = "tag_name")]
    pub tag: String,
    #[serde(default, alias = "tag_color")]
    pub color_code: Option<String>,
}

/// A template tag posted on a specific date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTag {
    #[serde(default, deserialize_with = "deserialize_opt_id", alias = "tag_id")]
    pub id: Option<String>,
    #[serde(alias = "tag_name")]
    pub tag: String,
    #[serde(default, alias = "tag_color")]
    pub color_code: Option<String>,
    #[serde(default)]
    pub submitter_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TagsByDateResponse {
    #[serde(default)]
    pub data: Vec<CalendarTag>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostTagRequest {
    pub tag_name: String,
    pub tag_color: String,
    pub submitter_id: String,
    pub date: String,
}

/// Reusable (name, colour) label defined by a community.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTag {
    #[serde(default, deserialize_with = "deserialize_opt_id", alias = "tag_id")]
    pub id: Option<String>,
    #[serde(alias = "tag_name")]
    pub tag: String,
    pub color_code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateTagsResponse {
    #[serde(default, alias = "tags")]
    pub template_tags: Vec<TemplateTag>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateTagRequest {
    pub tag_name: String,
    pub color_code: String,
}

// =============================================================
// Chat
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(deserialize_with = "deserialize_id")]
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub message_content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatHistoryResponse {
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostChatRequest {
    pub date: String,
    pub message: String,
    pub sender_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PostChatResponse {
    pub new_message: ChatMessage,
}

// =============================================================
// Id normalization
// =============================================================

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(E::custom(format!("expected string or integer id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => id_from_value(value).map(Some),
    }
}

fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(values) => values.into_iter().map(id_from_value::<D::Error>).collect(),
        serde_json::Value::Null => Ok(Vec::new()),
        other => Err(D::Error::custom(format!("expected id list, got {other}"))),
    }
}
