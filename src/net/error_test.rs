use super::*;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 409, message: Some("Community name already taken".into()) };
    assert_eq!(err.user_message("Could not create community."), "Community name already taken");
}

#[test]
fn user_message_uses_rejection_text() {
    let err = ApiError::Rejected("Already joined".into());
    assert_eq!(err.user_message("fallback"), "Already joined");
}

#[test]
fn user_message_hides_transport_details() {
    let err = ApiError::Transport("TypeError: Failed to fetch".into());
    assert_eq!(err.user_message("Could not reach the server."), "Could not reach the server.");
}

#[test]
fn user_message_ignores_blank_server_message() {
    let err = ApiError::Status { status: 500, message: Some("  ".into()) };
    assert_eq!(err.user_message("Something went wrong."), "Something went wrong.");
}

#[test]
fn is_not_found_matches_only_404() {
    assert!(ApiError::Status { status: 404, message: None }.is_not_found());
    assert!(!ApiError::Status { status: 500, message: None }.is_not_found());
    assert!(!ApiError::Unavailable.is_not_found());
}
