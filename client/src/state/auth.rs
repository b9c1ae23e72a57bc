//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context by `App`. Route dispatch and
//! the login page read it; only the login flow and logout write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use time::OffsetDateTime;

use crate::net::types::AuthUser;
use crate::state::session::{CookieBackend, Session, SessionStore};

/// Coarse session status used by route dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// The session cookie has not been read yet (server render, pre-hydration).
    Loading,
    Authenticated,
    Anonymous,
}

/// Authentication state tracking the session and the logged-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Session id mirrored from the session cookie.
    pub session: Option<String>,
    /// Session created by the most recent login in this tab, with its expiry.
    pub issued: Option<Session>,
    /// User returned by the most recent login in this tab.
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the browser has read the session cookie.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.is_authenticated() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    /// Record the result of reading the session cookie.
    ///
    /// Login data belonging to a different session id is dropped.
    pub fn session_loaded(&mut self, session: Option<String>) {
        if self.issued.as_ref().is_some_and(|issued| session.as_deref() != Some(issued.id.as_str())) {
            self.issued = None;
        }
        if self.user.as_ref().is_some_and(|user| session.as_deref() != Some(user.session_id.as_str())) {
            self.user = None;
        }
        self.session = session;
        self.loading = false;
    }

    /// Reconcile with the cookie as read at `now`. A cookie whose login
    /// expiry has passed counts as absent even if the browser still returns
    /// it. Returns whether anything changed, so callers can skip notifying
    /// subscribers.
    pub fn sync_session(&mut self, current: Option<String>, now: OffsetDateTime) -> bool {
        let current = current.filter(|id| {
            self.issued
                .as_ref()
                .is_none_or(|issued| issued.id != *id || issued.is_valid_at(now))
        });
        if !self.loading && self.session == current {
            return false;
        }
        self.session_loaded(current);
        true
    }

    /// Record a successful login and the session it created.
    pub fn sign_in(&mut self, user: AuthUser, session: Session) {
        self.session = Some(session.id.clone());
        self.issued = Some(session);
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.issued = None;
        self.user = None;
        self.loading = false;
    }
}

/// Clear the session cookie and in-memory auth state.
pub fn end_session<B: CookieBackend>(store: &SessionStore<B>, state: &mut AuthState) {
    store.clear();
    state.sign_out();
}
