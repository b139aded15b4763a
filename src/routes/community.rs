//! Community membership routes.

use super::{Page, RouteDescriptor};

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::guarded("/community/create", Page::CommunityCreate),
    RouteDescriptor::guarded("/community/join", Page::CommunityJoin),
    RouteDescriptor::guarded("/community/:community_id/leave", Page::CommunityLeave),
    RouteDescriptor::guarded("/community/:community_id/members", Page::CommunityMembers),
];
