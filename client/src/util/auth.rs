//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route dispatcher and the login page must agree on where users land
//! before and after authenticating. The originally requested path travels as
//! a `next` query parameter on the login URL and is consumed by the first
//! post-login navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use url::form_urlencoded;

pub const LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_ROUTE: &str = "/dashboard";
pub const INTENT_PARAM: &str = "next";

/// The protected path a user asked for before being sent to login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    path: String,
}

impl NavigationIntent {
    /// Accept only same-origin absolute paths that do not point back at login.
    pub fn new(path: &str) -> Option<Self> {
        let path = path.trim();
        if !path.starts_with('/') || path.starts_with("//") || path.starts_with("/\\") {
            return None;
        }
        let route = path.split(['?', '#']).next().unwrap_or(path);
        if route.trim_end_matches('/') == LOGIN_ROUTE {
            return None;
        }
        Some(Self { path: path.to_owned() })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Login URL that remembers `requested` as the navigation intent.
pub fn login_redirect(requested: &str) -> String {
    match NavigationIntent::new(requested) {
        Some(intent) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(INTENT_PARAM, intent.path())
                .finish();
            format!("{LOGIN_ROUTE}?{query}")
        }
        None => LOGIN_ROUTE.to_owned(),
    }
}

/// Where to go after a successful login.
pub fn post_login_target(intent: Option<&NavigationIntent>) -> String {
    intent.map_or_else(|| DEFAULT_ROUTE.to_owned(), |intent| intent.path().to_owned())
}

/// Redirect decision when the login page mounts.
///
/// `None` means render the login form.
pub fn mount_redirect(has_session: bool, intent: Option<&NavigationIntent>) -> Option<String> {
    has_session.then(|| post_login_target(intent))
}
