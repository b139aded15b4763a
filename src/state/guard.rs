//! Route guard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route::ProtectedRoute` owns one [`GuardMachine`]
//! per mounted guard and calls [`GuardMachine::enter`] every time the router
//! pathname changes. The machine itself performs no I/O: it hands out
//! [`GuardTicket`]s and later accepts or discards the verdicts that come back.
//!
//! DESIGN
//! ======
//! Each entry bumps a sequence number. A verdict is applied only when its
//! ticket carries the latest sequence *and* the path still being shown, so a
//! slow validation for `/a` can never authorize `/b`. State always restarts at
//! [`GuardState::Checking`]; nothing is cached across navigations.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos_router::NavigateOptions;

use crate::net::validator::{SessionValidator, validate};
use crate::state::session::Session;
use crate::util::auth::redirect_to_login;

/// What the guard currently renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Validation in flight; a loading indicator is shown.
    #[default]
    Checking,
    /// Children render unmodified.
    Authorized,
    /// Nothing renders; the caller redirects to the login page.
    Unauthorized,
}

/// Identifies one validation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardTicket {
    pub seq: u64,
    pub path: String,
}

/// Work the caller must do after entering a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckPlan {
    /// No usable session: resolve as unauthorized without a network call.
    Deny(GuardTicket),
    /// Ask the validator about `Session`.
    Validate(GuardTicket, Session),
}

impl CheckPlan {
    pub fn ticket(&self) -> &GuardTicket {
        match self {
            Self::Deny(ticket) | Self::Validate(ticket, _) => ticket,
        }
    }
}

/// Outcome of feeding a verdict back into the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Superseded or already resolved; ignore.
    Stale,
    Authorized,
    /// Caller must replace the history entry with the login page.
    Unauthorized,
}

#[derive(Clone, Debug, Default)]
pub struct GuardMachine {
    path: Option<String>,
    seq: u64,
    state: GuardState,
}

impl GuardMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Start a fresh check for `path`, invalidating every earlier ticket.
    pub fn begin(&mut self, path: &str) -> GuardTicket {
        self.seq += 1;
        self.path = Some(path.to_owned());
        self.state = GuardState::Checking;
        GuardTicket { seq: self.seq, path: path.to_owned() }
    }

    /// [`begin`](Self::begin) plus the decision whether a network call is needed.
    pub fn enter(&mut self, path: &str, session: Option<Session>) -> CheckPlan {
        let ticket = self.begin(path);
        match session.filter(Session::is_complete) {
            Some(session) => CheckPlan::Validate(ticket, session),
            None => CheckPlan::Deny(ticket),
        }
    }

    /// `true` while `ticket` is the latest one issued for the shown path.
    pub fn is_current(&self, ticket: &GuardTicket) -> bool {
        ticket.seq == self.seq && self.path.as_deref() == Some(ticket.path.as_str())
    }

    /// Apply a verdict. Stale tickets and second verdicts for the same ticket
    /// leave the state untouched.
    pub fn resolve(&mut self, ticket: &GuardTicket, valid: bool) -> Resolution {
        if !self.is_current(ticket) || self.state != GuardState::Checking {
            log::debug!("guard: discarding stale verdict for {} (seq {})", ticket.path, ticket.seq);
            return Resolution::Stale;
        }
        if valid {
            self.state = GuardState::Authorized;
            Resolution::Authorized
        } else {
            self.state = GuardState::Unauthorized;
            Resolution::Unauthorized
        }
    }

    /// State as seen by a view rendering `path`. A path the machine has not
    /// entered yet is still checking.
    pub fn view_state(&self, path: &str) -> GuardState {
        if self.path.as_deref() == Some(path) { self.state } else { GuardState::Checking }
    }
}

/// Act on a verdict: only `Unauthorized` navigates, replacing the current
/// history entry with the login page.
pub fn after_resolve<F>(resolution: Resolution, path: &str, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    match resolution {
        Resolution::Unauthorized => redirect_to_login(navigate),
        Resolution::Authorized => log::debug!("guard: {path} authorized"),
        Resolution::Stale => {}
    }
}

/// Carry out `plan`: a denial resolves to `false` without touching the
/// validator, otherwise exactly one validation call is made.
pub async fn evaluate(plan: CheckPlan, validator: &dyn SessionValidator) -> (GuardTicket, bool) {
    match plan {
        CheckPlan::Deny(ticket) => {
            log::debug!("guard: no session for {}", ticket.path);
            (ticket, false)
        }
        CheckPlan::Validate(ticket, session) => {
            let valid = validate(validator, &session).await;
            (ticket, valid)
        }
    }
}
