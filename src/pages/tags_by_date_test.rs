use super::*;

#[test]
fn chat_path_carries_date_query() {
    assert_eq!(chat_path("42", "9", "2025-03-01"), "/community/42/tag/9/chat?date=2025-03-01");
}

#[test]
fn post_path_targets_date() {
    assert_eq!(post_path("42", "2025-03-01"), "/community/42/calendar/2025-03-01/tags/post");
}

#[test]
fn post_complete_path_extends_post_path() {
    assert_eq!(
        post_complete_path("42", "2025-03-01"),
        "/community/42/calendar/2025-03-01/tags/post/complete"
    );
}

#[test]
fn chat_path_encodes_ids() {
    assert_eq!(chat_path("a@b", "t 1", "2025-03-01"), "/community/a%40b/tag/t%201/chat?date=2025-03-01");
}
