//! Session guard around routable content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::AppRoutes` wraps every guarded page in [`ProtectedRoute`]. On mount
//! and whenever the router pathname changes the guard re-enters its
//! [`GuardMachine`], validates the stored session once and either renders the
//! children unmodified or replaces the history entry with the login page.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never surface: they resolve to `Unauthorized` and a
//! silent redirect. Verdicts for a path that is no longer shown are dropped
//! by the machine's ticket check.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppContext;
use crate::components::status::LoadingIndicator;
use crate::state::guard::{GuardMachine, GuardState, after_resolve, evaluate};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let location = use_location();
    let navigate = use_navigate();
    let machine = RwSignal::new(GuardMachine::new());

    Effect::new(move || {
        let path = location.pathname.get();
        let session = context.session.get();
        let Some(plan) = machine.try_update(|machine| machine.enter(&path, session)) else {
            return;
        };
        let validator = context.validator.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let (ticket, valid) = evaluate(plan, validator.as_ref()).await;
            if let Some(resolution) = machine.try_update(|machine| machine.resolve(&ticket, valid)) {
                after_resolve(resolution, &ticket.path, &navigate);
            }
        });
    });

    move || {
        let path = location.pathname.get();
        match machine.with(|machine| machine.view_state(&path)) {
            GuardState::Checking => view! { <LoadingIndicator/> }.into_any(),
            GuardState::Authorized => children().into_any(),
            GuardState::Unauthorized => ().into_any(),
        }
    }
}
