use super::*;

fn message(sender_id: &str, sender_name: Option<&str>) -> ChatMessage {
    ChatMessage {
        sender_id: sender_id.into(),
        sender_name: sender_name.map(Into::into),
        message_content: "hi".into(),
        timestamp: None,
    }
}

#[test]
fn validate_chat_message_trims() {
    assert_eq!(validate_chat_message("  hello \n"), Ok("hello".to_owned()));
}

#[test]
fn validate_chat_message_rejects_blank() {
    assert_eq!(validate_chat_message(""), Err("Message cannot be empty."));
    assert_eq!(validate_chat_message("   "), Err("Message cannot be empty."));
}

#[test]
fn validate_chat_message_limit_counts_characters() {
    assert!(validate_chat_message(&"a".repeat(MAX_CHAT_MESSAGE_CHARS)).is_ok());
    assert!(validate_chat_message(&"a".repeat(MAX_CHAT_MESSAGE_CHARS + 1)).is_err());
    assert!(validate_chat_message(&"あ".repeat(MAX_CHAT_MESSAGE_CHARS)).is_ok());
}

#[test]
fn own_messages_align_right() {
    assert_eq!(message_class(&message("7", None), Some("7")), "chat__message chat__message--own");
    assert_eq!(message_class(&message("8", None), Some("7")), "chat__message");
    assert_eq!(message_class(&message("7", None), None), "chat__message");
}

#[test]
fn sender_label_falls_back_to_id() {
    assert_eq!(sender_label(&message("7", Some("Aki"))), "Aki");
    assert_eq!(sender_label(&message("7", None)), "7");
}
