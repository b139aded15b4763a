//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`App`] builds the shared services once ([`AppContext`]), composes the
//! route tables and mounts the navigation shell next to [`AppRoutes`], which
//! hands every descriptor to leptos_router's `<Routes>`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::iterators::StaticVec;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NestedRoute;
use leptos_router::components::{RouteChildren, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::params::ParamsMap;

use crate::components::nav_shell::NavShell;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::validator::SessionValidator;
use crate::pages::calendar::CalendarPage;
use crate::pages::community_create::CommunityCreatePage;
use crate::pages::community_join::CommunityJoinPage;
use crate::pages::community_leave::CommunityLeavePage;
use crate::pages::community_members::CommunityMembersPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::logout::LogoutPage;
use crate::pages::signup::SignupPage;
use crate::pages::tag_chat::TagChatPage;
use crate::pages::tag_post::{TagPostCompletePage, TagPostPage};
use crate::pages::tags_by_date::TagsByDatePage;
use crate::pages::template_tags::{TemplateTagCreatePage, TemplateTagEditPage, TemplateTagListPage};
use crate::pages::user_edit::{UserEditCompletePage, UserEditPage};
use crate::routes::{Page, RouteDescriptor, RouteTable};
use crate::state::nav::NavShellApi;
use crate::state::session::{BrowserCookieJar, BrowserSessionStore, SessionStore};

/// Services shared by every component.
#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<dyn SessionStore>,
    pub validator: Arc<dyn SessionValidator>,
    pub shell_api: Arc<dyn NavShellApi>,
    pub api: Arc<ApiClient>,
}

impl AppContext {
    /// Wire every service to one REST client.
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Self {
        let api = Arc::new(ApiClient::new(config));
        Self { session, validator: api.clone(), shell_api: api.clone(), api }
    }

    /// Cookie-backed session plus build-time API configuration.
    pub fn browser() -> Self {
        let config = ApiConfig::from_env().unwrap_or_else(|err| {
            log::error!("invalid API configuration, using same-origin defaults: {err}");
            ApiConfig::default()
        });
        Self::new(config, Arc::new(BrowserSessionStore::new(BrowserCookieJar)))
    }
}

/// Community currently selected in the navigation shell or addressed by the
/// page's `:community_id`.
#[derive(Clone, Copy)]
pub struct SelectedCommunity(pub RwSignal<Option<String>>);

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppContext::browser());
    provide_context(SelectedCommunity(RwSignal::new(None)));

    let table = RouteTable::app().unwrap_or_else(|err| {
        log::error!("route table rejected, serving home only: {err}");
        RouteTable::fallback_only()
    });

    view! {
        <Title text="Community Calendar"/>
        <Router>
            <NavShell/>
            <main class="app-main">
                <AppRoutes table=table/>
            </main>
        </Router>
    }
}

/// Mounts one leptos_router route per descriptor; anything unmatched
/// renders Home.
#[component]
pub fn AppRoutes(table: RouteTable) -> impl IntoView {
    let routes: StaticVec<_> = table
        .routes()
        .iter()
        .map(|descriptor| {
            let descriptor = *descriptor;
            NestedRoute::new(descriptor.path(), move || route_view(descriptor))
        })
        .collect::<Vec<_>>()
        .into();

    view! {
        <Routes
            fallback=|| view! { <HomePage/> }
            children=RouteChildren::to_children(move || routes)
        />
    }
}

/// Page for `descriptor`, re-rendered when its params change and placed
/// behind the guard when the descriptor is guarded.
fn route_view(descriptor: RouteDescriptor) -> AnyView {
    let params = use_params_map();
    let selected = expect_context::<SelectedCommunity>();
    Effect::new(move || {
        if let Some(community_id) = params.with(|params| params.get("community_id")) {
            if selected.0.get_untracked().as_deref() != Some(community_id.as_str()) {
                selected.0.set(Some(community_id));
            }
        }
    });

    let page = descriptor.page;
    if descriptor.guarded {
        view! { <ProtectedRoute>{move || params.with(|params| render_page(page, params))}</ProtectedRoute> }
            .into_any()
    } else {
        (move || params.with(|params| render_page(page, params))).into_any()
    }
}

/// Build the view for `page` from the router's decoded params.
pub fn render_page(page: Page, params: &ParamsMap) -> AnyView {
    let value = |name: &str| params.get(name).unwrap_or_default();
    let community_id = value("community_id");
    let date = value("date");
    let tag_id = value("tag_id");
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Logout => view! { <LogoutPage/> }.into_any(),
        Page::UserEdit => view! { <UserEditPage user_id=value("user_id")/> }.into_any(),
        Page::UserEditComplete => view! { <UserEditCompletePage/> }.into_any(),
        Page::CommunityCreate => view! { <CommunityCreatePage/> }.into_any(),
        Page::CommunityJoin => view! { <CommunityJoinPage/> }.into_any(),
        Page::CommunityLeave => view! { <CommunityLeavePage community_id=community_id/> }.into_any(),
        Page::CommunityMembers => view! { <CommunityMembersPage community_id=community_id/> }.into_any(),
        Page::CalendarView => view! { <CalendarPage community_id=community_id/> }.into_any(),
        Page::TagsByDate => view! { <TagsByDatePage community_id=community_id date=date/> }.into_any(),
        Page::TagPost => view! { <TagPostPage community_id=community_id date=date/> }.into_any(),
        Page::TagPostComplete => view! { <TagPostCompletePage community_id=community_id date=date/> }.into_any(),
        Page::TemplateTagList => view! { <TemplateTagListPage community_id=community_id/> }.into_any(),
        Page::TemplateTagCreate => view! { <TemplateTagCreatePage community_id=community_id/> }.into_any(),
        Page::TemplateTagEdit => {
            view! { <TemplateTagEditPage community_id=community_id tag_id=tag_id/> }.into_any()
        }
        Page::TagChat => view! { <TagChatPage community_id=community_id tag_id=tag_id/> }.into_any(),
    }
}
