//! Percent-encoding for path segments in hrefs and backend URLs.
//!
//! Route params arrive decoded from leptos_router, so values are encoded
//! exactly once on the way out.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 unreserved set.
pub const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Encode `raw` for use as a single path segment.
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}
