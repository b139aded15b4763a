//! Tag colour validation and CSS normalization.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Neutral grey used when a stored colour is unusable.
pub const FALLBACK_TAG_COLOR: &str = "#cccccc";

/// Parse `#RRGGBB` into RGB channels. Short `#RGB` forms are rejected because
/// template tags always store six digits.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Validate a template tag colour entered by the user.
///
/// # Errors
///
/// Returns a message for inline display when the value is not `#RRGGBB`.
pub fn validate_color_code(raw: &str) -> Result<String, &'static str> {
    match parse_hex_rgb(raw) {
        Some((r, g, b)) => Ok(format!("#{r:02x}{g:02x}{b:02x}")),
        None => Err("Colour must be in #RRGGBB format."),
    }
}

/// CSS colour for a stored tag colour. Older records omit the leading `#`.
pub fn css_color(stored: Option<&str>) -> String {
    let Some(stored) = stored.map(str::trim).filter(|value| !value.is_empty()) else {
        return FALLBACK_TAG_COLOR.to_owned();
    };
    let prefixed = if stored.starts_with('#') { stored.to_owned() } else { format!("#{stored}") };
    match parse_hex_rgb(&prefixed) {
        Some((r, g, b)) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => FALLBACK_TAG_COLOR.to_owned(),
    }
}
