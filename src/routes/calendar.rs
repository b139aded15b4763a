//! Calendar, dated tag and template tag routes. `:date` is `YYYY-MM-DD`.

use super::{Page, RouteDescriptor};

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::guarded("/community/:community_id/calendar/view", Page::CalendarView),
    RouteDescriptor::guarded("/community/:community_id/calendar/:date/tags/view", Page::TagsByDate),
    RouteDescriptor::guarded("/community/:community_id/calendar/:date/tags/post", Page::TagPost),
    RouteDescriptor::guarded("/community/:community_id/calendar/:date/tags/post/complete", Page::TagPostComplete),
    RouteDescriptor::guarded("/community/:community_id/template_tags", Page::TemplateTagList),
    RouteDescriptor::guarded("/community/:community_id/template_tags/create", Page::TemplateTagCreate),
    RouteDescriptor::guarded("/community/:community_id/template_tags/:tag_id/edit", Page::TemplateTagEdit),
];
