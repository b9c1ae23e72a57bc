//! Route table and dispatcher.
//!
//! DESIGN
//! ======
//! Routing is a flat list of `(path, access, target)` entries. `dispatch`
//! resolves a location against the table and the current session status,
//! producing either a page to render or a redirect. `App` mounts a single
//! outlet that renders whatever `dispatch` decides, so guard behavior lives
//! in one testable function instead of being spread across route wrappers.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::state::auth::SessionStatus;
use crate::util::auth::{DEFAULT_ROUTE, login_redirect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Products,
    Credentials,
    Docs,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Products, Self::Credentials, Self::Docs];

    pub fn path(self) -> &'static str {
        match self {
            Self::Products => "/dashboard/products",
            Self::Credentials => "/dashboard/credentials",
            Self::Docs => "/dashboard/docs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::Credentials => "Credentials",
            Self::Docs => "Docs",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Dashboard(DashboardTab),
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Requires a valid session; otherwise redirects to login.
    Guarded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Page(Page),
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
    pub target: Target,
}

const fn route(path: &'static str, access: Access, target: Target) -> RouteEntry {
    RouteEntry { path, access, target }
}

pub const ROUTES: &[RouteEntry] = &[
    route("/", Access::Guarded, Target::Redirect(DEFAULT_ROUTE)),
    route("/login", Access::Public, Target::Page(Page::Login)),
    route("/signup", Access::Public, Target::Page(Page::Signup)),
    route("/dashboard", Access::Guarded, Target::Redirect("/dashboard/products")),
    route("/dashboard/products", Access::Guarded, Target::Page(Page::Dashboard(DashboardTab::Products))),
    route("/dashboard/credentials", Access::Guarded, Target::Page(Page::Dashboard(DashboardTab::Credentials))),
    route("/dashboard/docs", Access::Guarded, Target::Page(Page::Dashboard(DashboardTab::Docs))),
];

/// Outcome of resolving a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Render(Page),
    Redirect(String),
    /// Guarded route while the session cookie has not been read yet.
    Pending,
}

/// Strip query/fragment and trailing slashes; the root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Resolve `path` for a visitor with the given session status.
pub fn dispatch(path: &str, session: SessionStatus) -> Dispatch {
    let Some(entry) = lookup(path) else {
        return Dispatch::Render(Page::NotFound);
    };
    if entry.access == Access::Guarded {
        match session {
            SessionStatus::Loading => return Dispatch::Pending,
            SessionStatus::Anonymous => return Dispatch::Redirect(login_redirect(path)),
            SessionStatus::Authenticated => {}
        }
    }
    match entry.target {
        Target::Page(page) => Dispatch::Render(page),
        Target::Redirect(to) => Dispatch::Redirect(to.to_owned()),
    }
}
