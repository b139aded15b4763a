use super::*;

// =============================================================
// Base URL
// =============================================================

#[test]
fn parse_base_url_defaults_to_same_origin() {
    assert_eq!(parse_base_url(None), Ok(String::new()));
    assert_eq!(parse_base_url(Some("   ")), Ok(String::new()));
}

#[test]
fn parse_base_url_trims_trailing_slashes() {
    assert_eq!(
        parse_base_url(Some("https://api.example.com//")),
        Ok("https://api.example.com".to_owned())
    );
}

#[test]
fn parse_base_url_rejects_non_http_scheme() {
    assert_eq!(
        parse_base_url(Some("ftp://example.com")),
        Err(ConfigError::InvalidBaseUrl("ftp://example.com".to_owned()))
    );
}

// =============================================================
// Log level
// =============================================================

#[test]
fn parse_log_level_accepts_known_names() {
    assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
    assert_eq!(parse_log_level(Some(" WARN ")), log::Level::Warn);
}

#[test]
fn parse_log_level_falls_back_to_default() {
    assert_eq!(parse_log_level(None), DEFAULT_LOG_LEVEL);
    assert_eq!(parse_log_level(Some("chatty")), DEFAULT_LOG_LEVEL);
}

#[test]
fn parse_timeout_ms_rejects_zero_and_garbage() {
    assert_eq!(parse_timeout_ms(Some("2500")), 2500);
    assert_eq!(parse_timeout_ms(Some("0")), DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(parse_timeout_ms(Some("soon")), DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(parse_timeout_ms(None), DEFAULT_REQUEST_TIMEOUT_MS);
}

// =============================================================
// Endpoint rendering
// =============================================================

#[test]
fn render_expands_every_placeholder() {
    let endpoints = Endpoints::default();
    assert_eq!(
        Endpoints::render(&endpoints.tag_chat, &[("community_id", "42"), ("tag_id", "7")]),
        "/api/community/42/tag/7/chat"
    );
}

#[test]
fn render_percent_encodes_values() {
    assert_eq!(Endpoints::render("/api/user/get/{user_id}", &[("user_id", "a b/c")]), "/api/user/get/a%20b%2Fc");
}

#[test]
fn render_leaves_unknown_placeholders() {
    assert_eq!(Endpoints::render("/x/{missing}", &[("user_id", "1")]), "/x/{missing}");
}

// =============================================================
// Icons
// =============================================================

fn api_config() -> ApiConfig {
    ApiConfig { base_url: "http://localhost:5001".into(), ..ApiConfig::default() }
}

#[test]
fn icon_url_resolves_stored_file_name() {
    assert_eq!(
        api_config().icon_url(Some("cat face.png")).as_deref(),
        Some("http://localhost:5001/uploads/cat%20face.png")
    );
}

#[test]
fn icon_url_prefixes_backend_paths_and_keeps_absolute_urls() {
    let config = api_config();
    assert_eq!(
        config.icon_url(Some("/uploads/community/1.png")).as_deref(),
        Some("http://localhost:5001/uploads/community/1.png")
    );
    assert_eq!(
        config.icon_url(Some("https://cdn.test/a.png")).as_deref(),
        Some("https://cdn.test/a.png")
    );
}

#[test]
fn icon_url_is_none_without_a_name() {
    assert_eq!(api_config().icon_url(None), None);
    assert_eq!(api_config().icon_url(Some("  ")), None);
}

#[test]
fn icon_url_follows_overridden_template() {
    let mut config = api_config();
    config.endpoints.user_icon = "/static/icons/{icon_name}".into();
    assert_eq!(config.icon_url(Some("a.png")).as_deref(), Some("http://localhost:5001/static/icons/a.png"));
}
