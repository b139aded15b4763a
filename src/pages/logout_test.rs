use super::*;
use crate::config::{SID_COOKIE, USER_ID_COOKIE};
use crate::state::session::{CookieJar, CookieSessionStore, MemoryCookieJar, Session, SessionStoreError};

/// Jar whose `sid` cookie cannot be removed.
#[derive(Default)]
struct StickyJar(MemoryCookieJar);

impl CookieJar for StickyJar {
    fn read(&self, name: &str) -> Option<String> {
        self.0.read(name)
    }

    fn write(&self, name: &str, value: &str) -> Result<(), SessionStoreError> {
        self.0.write(name, value)
    }

    fn remove(&self, name: &str) -> Result<(), SessionStoreError> {
        if name == SID_COOKIE {
            return Err(SessionStoreError::Remove { name: name.to_owned(), reason: "locked".into() });
        }
        self.0.remove(name)
    }
}

#[test]
fn finish_logout_clears_both_cookies() {
    let store = CookieSessionStore::new(MemoryCookieJar::default());
    store.set(&Session::new("sid-1", "u-1")).unwrap();

    assert_eq!(finish_logout(&store), Ok(()));
    assert_eq!(store.get(), None);
    assert_eq!(store.jar().read(USER_ID_COOKIE), None);
}

#[test]
fn finish_logout_reports_stuck_session() {
    let store = CookieSessionStore::new(StickyJar::default());
    store.set(&Session::new("sid-1", "u-1")).unwrap();

    assert!(finish_logout(&store).is_err());
    assert_eq!(store.get(), Some(Session::new("sid-1", "u-1")));
}
