use super::*;

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  a@b.c ", " secret "),
        Ok(("a@b.c".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_credentials_rejects_missing_fields() {
    assert!(validate_credentials("", "pw").is_err());
    assert!(validate_credentials("   ", "pw").is_err());
    assert!(validate_credentials("a@b.c", "").is_err());
}
