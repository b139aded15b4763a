//! Declarative route tables mounted on leptos_router.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each feature module exports a static `ROUTES` slice of
//! [`RouteDescriptor`]s. [`RouteTable::app`] concatenates them in a fixed
//! order. `app::AppRoutes` turns every descriptor into a leptos_router route
//! via [`RouteDescriptor::path`], wraps guarded pages in `ProtectedRoute` and
//! renders Home for anything unmatched.
//!
//! DESIGN
//! ======
//! Patterns are `/`-separated segments where `:name` binds a parameter.
//! Composition rejects any two patterns that could match the same path, so
//! declaration order never decides which page a URL reaches.


pub mod auth;
pub mod calendar;
pub mod chat;
pub mod community;
pub mod user;

use std::sync::Arc;

use leptos_router::{ParamSegment, PossibleRouteMatch, StaticSegment};
use thiserror::Error;

use crate::util::url::encode_segment;

/// Every routable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Signup,
    Logout,
    UserEdit,
    UserEditComplete,
    CommunityCreate,
    CommunityJoin,
    CommunityLeave,
    CommunityMembers,
    CalendarView,
    TagsByDate,
    TagPost,
    TagPostComplete,
    TemplateTagList,
    TemplateTagCreate,
    TemplateTagEdit,
    TagChat,
}

/// Path pattern bound to a page, optionally behind the session guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub pattern: &'static str,
    pub page: Page,
    pub guarded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

impl Segment<'_> {
    fn compatible(self, other: Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            _ => true,
        }
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

impl RouteDescriptor {
    pub const fn open(pattern: &'static str, page: Page) -> Self {
        Self { pattern, page, guarded: false }
    }

    pub const fn guarded(pattern: &'static str, page: Page) -> Self {
        Self { pattern, page, guarded: true }
    }

    fn segments(&self) -> Vec<Segment<'static>> {
        split_path(self.pattern)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(segment),
            })
            .collect()
    }

    fn validate(&self) -> Result<(), RouteTableError> {
        let invalid = || RouteTableError::InvalidPattern(self.pattern);
        if !self.pattern.starts_with('/') {
            return Err(invalid());
        }
        let mut names: Vec<&str> = Vec::new();
        for segment in self.segments() {
            if let Segment::Param(name) = segment {
                if name.is_empty() || names.contains(&name) {
                    return Err(invalid());
                }
                names.push(name);
            }
        }
        Ok(())
    }

    /// Segment chain leptos_router matches this pattern with.
    pub fn path(&self) -> RoutePath {
        let root: RoutePath = Arc::new(StaticSegment(""));
        self.segments().into_iter().fold(root, |path, segment| -> RoutePath {
            match segment {
                Segment::Literal(literal) => Arc::new((path, StaticSegment(literal))),
                Segment::Param(name) => Arc::new((path, ParamSegment(name))),
            }
        })
    }

    /// Raw parameters bound by `url`, or `None` unless the whole path
    /// matches.
    pub fn capture(&self, url: &str) -> Option<Vec<(String, String)>> {
        let matched = self.path().test(url).filter(|matched| matched.is_complete())?;
        Some(matched.params().into_iter().map(|(name, value)| (name.into_owned(), value)).collect())
    }

    /// `true` when some path would match both patterns.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (mine, theirs) = (self.segments(), other.segments());
        mine.len() == theirs.len() && mine.into_iter().zip(theirs).all(|(a, b)| a.compatible(b))
    }
}

/// Type-erased segment chain for one descriptor.
pub type RoutePath = Arc<dyn PossibleRouteMatch + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route patterns `{first}` and `{second}` overlap")]
    Overlap { first: &'static str, second: &'static str },
    #[error("invalid route pattern `{0}`")]
    InvalidPattern(&'static str),
}

/// Composed, overlap-free route list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

/// Page rendered for every unmatched path.
pub const FALLBACK: Page = Page::Home;

impl RouteTable {
    /// Concatenate `tables` in order.
    ///
    /// # Errors
    ///
    /// [`RouteTableError::InvalidPattern`] for malformed patterns and
    /// [`RouteTableError::Overlap`] naming the first pair that could match the
    /// same path.
    pub fn compose(tables: &[&[RouteDescriptor]]) -> Result<Self, RouteTableError> {
        let routes: Vec<RouteDescriptor> = tables.iter().flat_map(|table| table.iter().copied()).collect();
        for (index, route) in routes.iter().enumerate() {
            route.validate()?;
            if let Some(other) = routes[..index].iter().find(|earlier| earlier.overlaps(route)) {
                return Err(RouteTableError::Overlap { first: other.pattern, second: route.pattern });
            }
        }
        Ok(Self { routes })
    }

    /// The application's full table.
    ///
    /// # Errors
    ///
    /// See [`RouteTable::compose`].
    pub fn app() -> Result<Self, RouteTableError> {
        Self::compose(&[auth::ROUTES, user::ROUTES, community::ROUTES, calendar::ROUTES, chat::ROUTES])
    }

    /// Table with no routes; every path renders [`FALLBACK`].
    pub fn fallback_only() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Every descriptor matching `url`; at most one for a composed table.
    pub fn matches(&self, url: &str) -> Vec<&RouteDescriptor> {
        self.routes.iter().filter(|route| route.capture(url).is_some()).collect()
    }

    /// Page the router shows for `url`.
    pub fn page_for(&self, url: &str) -> Page {
        self.matches(url).first().map_or(FALLBACK, |route| route.page)
    }
}

/// Fill the `:name` segments of `pattern` with percent-encoded values.
/// Segments without a value are kept verbatim.
pub fn href(pattern: &str, params: &[(&str, &str)]) -> String {
    let segments: Vec<String> = split_path(pattern)
        .map(|segment| {
            segment
                .strip_prefix(':')
                .and_then(|name| params.iter().find(|(key, _)| *key == name))
                .map_or_else(|| segment.to_owned(), |(_, value)| encode_segment(value))
        })
        .collect();
    format!("/{}", segments.join("/"))
}
