use super::*;

fn client() -> ApiClient {
    ApiClient::new(ApiConfig { base_url: "http://api.test".into(), ..ApiConfig::default() })
}

// =============================================================
// URLs
// =============================================================

fn query(target: &Target) -> Vec<(&str, &str)> {
    target.query.iter().map(|(name, value)| (*name, value.as_str())).collect()
}

#[test]
fn joined_communities_url_passes_user_as_query() {
    let target = client().joined_communities_url("u 1");
    assert_eq!(target.url, "http://api.test/api/community/joined");
    assert_eq!(query(&target), [("user_id", "u 1")]);
}

#[test]
fn calendar_month_url_carries_year_and_month() {
    let target = client().calendar_month_url("7", 2025, 3);
    assert_eq!(target.url, "http://api.test/api/calendar/7");
    assert_eq!(query(&target), [("year", "2025"), ("month", "3")]);
}

#[test]
fn chat_url_adds_date_only_for_history() {
    let client = client();
    let history = client.chat_url("42", "9", Some("2025-03-01"));
    assert_eq!(history.url, "http://api.test/api/community/42/tag/9/chat");
    assert_eq!(query(&history), [("date", "2025-03-01")]);
    assert!(client.chat_url("42", "9", None).query.is_empty());
}

#[test]
fn endpoint_encodes_decoded_ids_once() {
    let target = client().endpoint(&client().config().endpoints.user_profile, &[("user_id", "a@b")]);
    assert_eq!(target.url, "http://api.test/api/user/get/a%40b");
}

#[test]
fn endpoint_uses_overridden_table() {
    let mut config = ApiConfig::default();
    config.endpoints.validate_session = "/v2/session/check".into();
    let client = ApiClient::new(config);
    assert_eq!(client.endpoint(&client.config().endpoints.validate_session, &[]).url, "/v2/session/check");
}

#[test]
fn icon_url_goes_through_config() {
    assert_eq!(client().icon_url(Some("me.png")).as_deref(), Some("http://api.test/uploads/me.png"));
}

// =============================================================
// Bodies
// =============================================================

#[test]
fn message_outcome_accepts_empty_and_non_json_bodies() {
    assert_eq!(message_outcome(""), Ok(None));
    assert_eq!(message_outcome("OK"), Ok(None));
}

#[test]
fn message_outcome_returns_message() {
    assert_eq!(message_outcome(r#"{"message":"created"}"#), Ok(Some("created".to_owned())));
}

#[test]
fn message_outcome_turns_error_field_into_rejection() {
    assert_eq!(
        message_outcome(r#"{"error":"community not found"}"#),
        Err(ApiError::Rejected("community not found".to_owned()))
    );
}

#[test]
fn status_error_keeps_server_message() {
    assert_eq!(
        status_error(409, r#"{"message":"name taken"}"#),
        ApiError::Status { status: 409, message: Some("name taken".to_owned()) }
    );
    assert_eq!(status_error(502, "<html>"), ApiError::Status { status: 502, message: None });
}

#[test]
fn decode_reports_schema_mismatch() {
    let result = decode::<ValidateSessionResponse>(r#"{"ok":true}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn tag_post_outcome_detects_duplicate() {
    assert_eq!(tag_post_outcome(Some(TAG_ALREADY_REGISTERED)), TagPostOutcome::AlreadyRegistered);
    assert_eq!(tag_post_outcome(Some("added")), TagPostOutcome::Added);
    assert_eq!(tag_post_outcome(None), TagPostOutcome::Added);
}

// =============================================================
// Native transport
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    use futures::executor::block_on;

    let client = client();
    assert_eq!(block_on(client.validate_session(&Session::new("s", "u"))), Err(ApiError::Unavailable));
    assert_eq!(block_on(client.fetch_member_ids("1")), Err(ApiError::Unavailable));
}
