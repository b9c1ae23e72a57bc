//! Cookie-backed session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the session cookie, the route guard and the login
//! page read it, and logout clears it. Cookie I/O is abstracted behind
//! [`CookieBackend`] so the same store runs against `document.cookie` in the
//! browser and an in-memory jar in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

/// Name of the session cookie shared with the developer API.
pub const SESSION_COOKIE_NAME: &str = "SWOB-DEV-FE";

/// Lifetime of a freshly created session.
pub const SESSION_TTL: Duration = Duration::hours(2);

/// A session created by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub expires_at: OffsetDateTime,
}

impl Session {
    /// A session is valid strictly before its expiry instant.
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        now < self.expires_at
    }
}

/// Minimal cookie jar interface.
///
/// Implementations must treat expired cookies as absent.
pub trait CookieBackend {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, cookie: Cookie<'static>);
    fn remove(&self, name: &str);
}

impl<T: CookieBackend + ?Sized> CookieBackend for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, cookie: Cookie<'static>) {
        (**self).set(cookie);
    }

    fn remove(&self, name: &str) {
        (**self).remove(name);
    }
}

/// Reads and writes the session cookie through a [`CookieBackend`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: CookieBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist `session_id` with an expiry of `now + SESSION_TTL`.
    pub fn create(&self, session_id: &str, now: OffsetDateTime) -> Session {
        let expires_at = now + SESSION_TTL;
        self.backend.set(session_cookie(session_id, expires_at));
        Session { id: session_id.to_owned(), expires_at }
    }

    /// Current session id, if a non-expired, non-empty cookie exists.
    pub fn current(&self) -> Option<String> {
        self.backend
            .get(SESSION_COOKIE_NAME)
            .filter(|value| !value.is_empty())
    }

    /// Drop the session cookie.
    pub fn clear(&self) {
        self.backend.remove(SESSION_COOKIE_NAME);
    }
}

/// Build the session cookie for `value` expiring at `expires_at`.
///
/// Carries both `Max-Age` and `Expires` so older browsers agree on lifetime.
pub fn session_cookie(value: &str, expires_at: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, value.to_owned()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL)
        .expires(expires_at)
        .build()
}

/// Cookie that overwrites and immediately expires `name`.
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .path("/")
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
