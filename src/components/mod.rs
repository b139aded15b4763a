//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared services from the `app::AppContext` provider and
//! keep their own transient state in local signals.

pub mod avatar;
pub mod nav_shell;
pub mod protected_route;
pub mod status;
