use super::*;

#[test]
fn parse_hex_rgb_reads_long_form() {
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#ABC"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
}

#[test]
fn validate_color_code_normalizes_case() {
    assert_eq!(validate_color_code("#FF8800"), Ok("#ff8800".to_owned()));
    assert!(validate_color_code("orange").is_err());
}

#[test]
fn css_color_accepts_missing_hash() {
    assert_eq!(css_color(Some("FF0000")), "#ff0000");
    assert_eq!(css_color(Some("#00ff00")), "#00ff00");
}

#[test]
fn css_color_falls_back_for_garbage() {
    assert_eq!(css_color(None), FALLBACK_TAG_COLOR);
    assert_eq!(css_color(Some("")), FALLBACK_TAG_COLOR);
    assert_eq!(css_color(Some("red")), FALLBACK_TAG_COLOR);
}
