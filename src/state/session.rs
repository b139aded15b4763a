//! Persisted login session (`sid` + `userId` cookies).
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard, the navigation shell and every page that needs
//! the current user id; written only by the login and logout pages. Consumers
//! receive the store through context as `Arc<dyn SessionStore>` so tests can
//! swap in an in-memory jar.
//!
//! INVARIANT
//! =========
//! The two cookies are written and removed as a pair. A failed second write
//! rolls the first one back, and a store that still ends up holding only one
//! of them reads as logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use cookie::time::{Duration, OffsetDateTime};
use cookie::{Cookie, CookieBuilder, SameSite};
use thiserror::Error;

use crate::config::{SID_COOKIE, USER_ID_COOKIE};

/// The (session id, user id) pair identifying a logged-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into(), user_id: user_id.into() }
    }

    /// Both fields present and non-blank.
    pub fn is_complete(&self) -> bool {
        !self.session_id.trim().is_empty() && !self.user_id.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("refusing to store a session with an empty field")]
    Incomplete,
    #[error("failed to write cookie `{name}`: {reason}")]
    Write { name: String, reason: String },
    #[error("failed to remove cookie `{name}`: {reason}")]
    Remove { name: String, reason: String },
    #[error("cookies are not available in this environment")]
    Unavailable,
}

/// Get/set/clear over the persisted session.
pub trait SessionStore: Send + Sync {
    /// Current session, or `None` when either field is missing.
    fn get(&self) -> Option<Session>;

    /// Persist both fields.
    ///
    /// # Errors
    ///
    /// Fails when the session is incomplete or the medium rejects a write;
    /// the previous session is left in place.
    fn set(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove both fields.
    ///
    /// # Errors
    ///
    /// Fails when the medium rejects a removal; the previous session is left
    /// in place.
    fn clear(&self) -> Result<(), SessionStoreError>;

    /// Convenience accessor for the current user id.
    fn user_id(&self) -> Option<String> {
        self.get().map(|session| session.user_id)
    }
}

/// Single-key cookie access. Writes may fail independently of each other.
pub trait CookieJar: Send + Sync {
    fn read(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SessionStoreError::Write`] when the value is not stored.
    fn write(&self, name: &str, value: &str) -> Result<(), SessionStoreError>;

    /// # Errors
    ///
    /// Returns [`SessionStoreError::Remove`] when the cookie is not removed.
    fn remove(&self, name: &str) -> Result<(), SessionStoreError>;
}

/// [`SessionStore`] over any [`CookieJar`], enforcing pairwise writes.
#[derive(Debug, Default)]
pub struct CookieSessionStore<J> {
    jar: J,
}

impl<J: CookieJar> CookieSessionStore<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    fn read_field(&self, name: &str) -> Option<String> {
        self.jar.read(name).filter(|value| !value.trim().is_empty())
    }

    /// Put `name` back to `previous` after a failed paired operation.
    fn restore(&self, name: &str, previous: Option<String>) {
        let result = match previous {
            Some(value) => self.jar.write(name, &value),
            None => self.jar.remove(name),
        };
        if let Err(err) = result {
            log::error!("session rollback failed, store may be half-written: {err}");
        }
    }
}

impl<J: CookieJar> SessionStore for CookieSessionStore<J> {
    fn get(&self) -> Option<Session> {
        let session_id = self.read_field(SID_COOKIE)?;
        let user_id = self.read_field(USER_ID_COOKIE)?;
        Some(Session { session_id, user_id })
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        if !session.is_complete() {
            return Err(SessionStoreError::Incomplete);
        }
        let previous_sid = self.jar.read(SID_COOKIE);
        self.jar.write(SID_COOKIE, &session.session_id)?;
        if let Err(err) = self.jar.write(USER_ID_COOKIE, &session.user_id) {
            self.restore(SID_COOKIE, previous_sid);
            return Err(err);
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let previous_sid = self.jar.read(SID_COOKIE);
        self.jar.remove(SID_COOKIE)?;
        if let Err(err) = self.jar.remove(USER_ID_COOKIE) {
            self.restore(SID_COOKIE, previous_sid);
            return Err(err);
        }
        Ok(())
    }
}

// =============================================================
// Jars
// =============================================================

/// Process-local jar used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = values.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
        Self { values: Mutex::new(values) }
    }
}

impl CookieJar for MemoryCookieJar {
    fn read(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner).get(name).cloned()
    }

    fn write(&self, name: &str, value: &str) -> Result<(), SessionStoreError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), SessionStoreError> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner).remove(name);
        Ok(())
    }
}

/// `document.cookie` jar. Cookies are scoped to `/` with no expiry so they
/// outlive reloads and vanish only on logout or manual clearing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCookieJar;

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl CookieJar for BrowserCookieJar {
    fn read(&self, name: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let header = html_document()?.cookie().ok()?;
            find_cookie(&header, name)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            None
        }
    }

    fn write(&self, name: &str, value: &str) -> Result<(), SessionStoreError> {
        #[cfg(feature = "csr")]
        {
            let document = html_document().ok_or(SessionStoreError::Unavailable)?;
            document
                .set_cookie(&set_cookie_line(name, value))
                .map_err(|err| SessionStoreError::Write { name: name.to_owned(), reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, value);
            Err(SessionStoreError::Unavailable)
        }
    }

    fn remove(&self, name: &str) -> Result<(), SessionStoreError> {
        #[cfg(feature = "csr")]
        {
            let document = html_document().ok_or(SessionStoreError::Unavailable)?;
            document
                .set_cookie(&expire_cookie_line(name))
                .map_err(|err| SessionStoreError::Remove { name: name.to_owned(), reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            Err(SessionStoreError::Unavailable)
        }
    }
}

/// The store the application runs with.
pub type BrowserSessionStore = CookieSessionStore<BrowserCookieJar>;

// =============================================================
// Cookie line helpers
// =============================================================

/// Look up `name` in a `document.cookie` header (`a=1; b=2`).
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

/// `Set-Cookie` style line for a session cookie without expiry.
pub fn set_cookie_line(name: &str, value: &str) -> String {
    session_cookie(name, value).build().encoded().to_string()
}

/// Line that deletes `name` by expiring it at the epoch.
pub fn expire_cookie_line(name: &str) -> String {
    session_cookie(name, "")
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
        .encoded()
        .to_string()
}

fn session_cookie(name: &str, value: &str) -> CookieBuilder<'static> {
    Cookie::build((name.to_owned(), value.to_owned())).path("/").same_site(SameSite::Lax)
}
