use super::{Page, RouteDescriptor};

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::guarded("/user/:user_id/edit", Page::UserEdit),
    RouteDescriptor::guarded("/user/:user_id/edit/complete", Page::UserEditComplete),
];
