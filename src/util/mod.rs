//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser side effects (navigation, reloads) live in `auth`; the remaining
//! modules are pure formatting and date math so pages stay thin.

pub mod auth;
pub mod avatar;
pub mod calendar;
pub mod color;
pub mod url;
