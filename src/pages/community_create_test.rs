use super::*;

#[test]
fn name_is_trimmed() {
    assert_eq!(validate_community_name("  Chess Club "), Ok("Chess Club".to_owned()));
}

#[test]
fn empty_name_is_rejected() {
    assert_eq!(validate_community_name("   "), Err("Enter a community name."));
}

#[test]
fn limit_counts_characters_not_bytes() {
    assert!(validate_community_name("abcdefghijklmnop").is_ok());
    assert!(validate_community_name("abcdefghijklmnopq").is_err());
    assert!(validate_community_name("将棋同好会将棋同好会将棋同好会将").is_ok());
}
