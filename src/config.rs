//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend base
//! URL and log level are baked in from `API_SERVER_URL` / `LOG_LEVEL` when the
//! crate is compiled. Backend paths live in [`Endpoints`] so deployments whose
//! API layout differs can swap the whole table without touching call sites.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

use crate::util::url::encode_segment;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Route that unauthorized visitors are redirected to.
pub const LOGIN_PATH: &str = "/auth/login";

/// Cookie holding the opaque session id.
pub const SID_COOKIE: &str = "sid";

/// Cookie holding the logged-in user's id.
pub const USER_ID_COOKIE: &str = "userId";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API_SERVER_URL must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),
}

/// Backend path templates.
///
/// Placeholders in braces (`{user_id}`, `{community_id}`, `{tag_id}`,
/// `{icon_name}`) are expanded by [`Endpoints::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub validate_session: String,
    pub login: String,
    pub logout: String,
    pub register: String,
    pub user_profile: String,
    pub user_update: String,
    pub joined_communities: String,
    pub community_detail: String,
    pub community_create: String,
    pub community_join: String,
    pub community_leave: String,
    pub community_members: String,
    pub calendar_month: String,
    pub tags_by_date: String,
    pub tag_add: String,
    pub template_tags: String,
    pub template_tag: String,
    pub tag_chat: String,
    /// Stored icon files, addressed by the `icon_name` the backend returns.
    pub user_icon: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            validate_session: "/api/sid/validate".into(),
            login: "/api/auth/login".into(),
            logout: "/api/auth/logout".into(),
            register: "/api/user/register".into(),
            user_profile: "/api/user/get/{user_id}".into(),
            user_update: "/api/user/{user_id}".into(),
            joined_communities: "/api/community/joined".into(),
            community_detail: "/api/community/{community_id}".into(),
            community_create: "/api/community/create".into(),
            community_join: "/api/community/join".into(),
            community_leave: "/api/community/leave".into(),
            community_members: "/api/community/members".into(),
            calendar_month: "/api/calendar/{user_id}".into(),
            tags_by_date: "/api/{community_id}/calendar/tag/get".into(),
            tag_add: "/api/{community_id}/calendar/tag/add".into(),
            template_tags: "/api/community/{community_id}/template_tags".into(),
            template_tag: "/api/community/{community_id}/template_tags/{tag_id}".into(),
            tag_chat: "/api/community/{community_id}/tag/{tag_id}/chat".into(),
            user_icon: "/uploads/{icon_name}".into(),
        }
    }
}

impl Endpoints {
    /// Expand `{name}` placeholders in `template` with percent-encoded values.
    ///
    /// Unknown placeholders are left in place so a misconfigured template is
    /// visible in request logs instead of silently hitting the wrong path.
    pub fn render(template: &str, params: &[(&str, &str)]) -> String {
        params.iter().fold(template.to_owned(), |path, (name, value)| {
            path.replace(&format!("{{{name}}}"), &encode_segment(value))
        })
    }
}

/// Typed API configuration shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host (+ optional prefix), without a trailing slash. Empty means
    /// same-origin requests.
    pub base_url: String,
    pub endpoints: Endpoints,
    /// Requests still pending after this long fail as transport errors.
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoints: Endpoints::default(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Build configuration from the compile-time environment.
    ///
    /// Optional:
    /// - `API_SERVER_URL`: backend origin; same origin when absent or empty
    /// - `API_TIMEOUT_MS`: per-request timeout, default 10000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value is not an
    /// http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(option_env!("API_SERVER_URL"))?;
        let request_timeout_ms = parse_timeout_ms(option_env!("API_TIMEOUT_MS"));
        Ok(Self { base_url, endpoints: Endpoints::default(), request_timeout_ms })
    }

    /// Absolute URL for an already-rendered path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Where to load an icon from.
    ///
    /// Absolute URLs pass through, backend-relative paths (`/uploads/a.png`)
    /// get the base URL and bare file names go through
    /// [`Endpoints::user_icon`]. Blank input has no icon.
    pub fn icon_url(&self, icon: Option<&str>) -> Option<String> {
        let icon = icon.map(str::trim).filter(|icon| !icon.is_empty())?;
        if icon.starts_with("http://") || icon.starts_with("https://") || icon.starts_with("data:") {
            return Some(icon.to_owned());
        }
        if icon.starts_with('/') {
            return Some(self.url(icon));
        }
        Some(self.url(&Endpoints::render(&self.endpoints.user_icon, &[("icon_name", icon)])))
    }
}

/// Validate and normalize a backend base URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for non-http(s) values.
pub fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(trimmed.to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

/// Parse a positive millisecond timeout, falling back to
/// [`DEFAULT_REQUEST_TIMEOUT_MS`].
pub fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

/// Parse a log level name, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
