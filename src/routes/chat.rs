use super::{Page, RouteDescriptor};

/// The chat date travels as a `?date=` query parameter.
pub const ROUTES: &[RouteDescriptor] =
    &[RouteDescriptor::guarded("/community/:community_id/tag/:tag_id/chat", Page::TagChat)];
