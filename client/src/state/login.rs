//! Login submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` owns the reactive signals; this module owns the decisions.
//! A submission validates the form, calls the [`AuthClient`], persists the
//! session on success, and returns a [`LoginOutcome`] describing what the
//! page must show and where it must navigate. Keeping the side effects that
//! touch signals out of here lets the whole flow run under plain `#[test]`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use time::OffsetDateTime;

use crate::net::api::{AuthClient, AuthFailure};
use crate::net::types::{AuthUser, Credentials};
use crate::state::session::{CookieBackend, Session, SessionStore};
use crate::state::toast::ToastKind;
use crate::util::auth::{NavigationIntent, post_login_target};
use crate::util::validation::{FieldErrors, LoginForm, validate_login};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const LOADING_MESSAGE: &str = "processing please wait ...";

/// Where the login page is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    /// Kept after success until navigation replaces the page.
    Succeeded,
}

impl LoginPhase {
    /// The loader replaces the form in every phase but `Idle`.
    pub fn shows_loader(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    Authenticated { user: AuthUser, session: Session, redirect_to: String },
    Failed(AuthFailure),
}

impl LoginOutcome {
    /// Phase the page should enter after this outcome.
    pub fn next_phase(&self) -> LoginPhase {
        match self {
            Self::Authenticated { .. } => LoginPhase::Succeeded,
            Self::Invalid(_) | Self::Failed(_) => LoginPhase::Idle,
        }
    }

    /// Toast to show for this outcome, if any.
    pub fn notification(&self) -> Option<(ToastKind, &'static str)> {
        match self {
            Self::Invalid(_) => None,
            Self::Authenticated { .. } => Some((ToastKind::Success, LOGIN_SUCCESS_MESSAGE)),
            Self::Failed(failure) => Some((ToastKind::Error, failure.message())),
        }
    }
}

pub struct LoginFlow<C, B> {
    client: C,
    sessions: SessionStore<B>,
}

impl<C: AuthClient, B: CookieBackend> LoginFlow<C, B> {
    pub fn new(client: C, sessions: SessionStore<B>) -> Self {
        Self { client, sessions }
    }

    /// Validate `form` and, if it passes, authenticate.
    pub async fn submit(
        &self,
        form: &LoginForm,
        intent: Option<&NavigationIntent>,
        now: OffsetDateTime,
    ) -> LoginOutcome {
        match validate_login(form) {
            Ok(credentials) => self.authenticate(&credentials, intent, now).await,
            Err(errors) => LoginOutcome::Invalid(errors),
        }
    }

    /// Send already-validated credentials and persist the session on success.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
        intent: Option<&NavigationIntent>,
        now: OffsetDateTime,
    ) -> LoginOutcome {
        match self.client.login(credentials).await {
            Ok(user) => {
                let session = self.sessions.create(&user.session_id, now);
                let redirect_to = post_login_target(intent);
                log::info!("login succeeded; redirecting to {redirect_to}");
                LoginOutcome::Authenticated { user, session, redirect_to }
            }
            Err(failure) => {
                log::warn!("login failed: {failure}");
                LoginOutcome::Failed(failure)
            }
        }
    }
}
