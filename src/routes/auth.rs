//! Home and authentication routes. Only logout needs a session.

use super::{Page, RouteDescriptor};

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::open("/", Page::Home),
    RouteDescriptor::open("/auth/login", Page::Login),
    RouteDescriptor::open("/auth/signup", Page::Signup),
    RouteDescriptor::guarded("/auth/logout", Page::Logout),
];
