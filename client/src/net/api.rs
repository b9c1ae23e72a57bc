//! Authentication endpoint client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the HTTP client reports a transport
//! failure since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into the closed [`AuthFailure`] set at this
//! boundary, so the login flow never inspects raw status codes or transport
//! errors itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{AuthUser, Credentials};
use crate::util::config::AppConfig;

/// Classified authentication failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    #[error("bad request")]
    BadRequest,
    #[error("not authorized")]
    Unauthorized,
    #[error("account conflict")]
    Conflict,
    #[error("too many requests")]
    RateLimited,
    #[error("internal server error")]
    ServerError,
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network failure: {0}")]
    Network(String),
    /// Any status without a dedicated classification.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The request could not be encoded or the response body not decoded.
    #[error("malformed exchange: {0}")]
    Malformed(String),
}

impl AuthFailure {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            other => Self::Status(other),
        }
    }

    /// User-facing notification text for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest => "An error occured. Please contact support",
            Self::Unauthorized => "Sorry you are not authorized to use this service. Please contact support",
            Self::Conflict => "There is a possible duplicate of this account please contact support",
            Self::RateLimited => "Too many failed attempts please wait a while and try again",
            Self::ServerError => "A critical error occured. Please contact support",
            Self::Network(_) => "An error occured, please check your network and try again",
            Self::Status(_) | Self::Malformed(_) => "An error occured, please try again",
        }
    }
}

/// Submits credentials to the authentication endpoint.
///
/// `?Send` because browser futures hold `JsValue`s.
#[async_trait(?Send)]
pub trait AuthClient {
    /// Exchange credentials for a user object carrying a `session_id`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`AuthFailure`] on any non-success outcome.
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, AuthFailure>;
}

#[async_trait(?Send)]
impl<T: AuthClient + ?Sized> AuthClient for &T {
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, AuthFailure> {
        (**self).login(credentials).await
    }
}

/// HTTP implementation targeting `POST {api_base_url}{login_path}`.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    endpoint: String,
}

impl HttpAuthClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { endpoint: config.login_url() }
    }
}

#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, AuthFailure> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .credentials(web_sys::RequestCredentials::Include)
                .json(credentials)
                .map_err(|e| AuthFailure::Malformed(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthFailure::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthFailure::from_status(resp.status()));
            }
            resp.json::<AuthUser>()
                .await
                .map_err(|e| AuthFailure::Malformed(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthFailure::Network(format!("{} is not reachable from the server", self.endpoint)))
        }
    }
}
