//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `types` defines the wire schema, `error` is the
//! shared failure taxonomy and `validator` turns the session-check endpoint
//! into the fail-closed yes/no answer the route guard needs.

pub mod api;
pub mod error;
pub mod types;
pub mod validator;
