//! Cookie backends for the session store.
//!
//! `BrowserCookies` talks to `document.cookie` and is a no-op outside the
//! browser. Values are percent-encoded on write and decoded on read.
//! Unit tests use `MemoryCookies`, an in-process jar with an explicit clock.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;

use cookie::Cookie;
#[cfg(test)]
use time::{Duration, OffsetDateTime};

use crate::state::session::{CookieBackend, removal_cookie};

/// `document.cookie` backend. Expiry is enforced by the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

impl CookieBackend for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            find_cookie(&raw, name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }

    fn set(&self, cookie: Cookie<'static>) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = html_document() else {
                log::warn!("no document available; cookie {} not written", cookie.name());
                return;
            };
            if let Err(e) = doc.set_cookie(&cookie.encoded().to_string()) {
                log::warn!("failed to write cookie {}: {e:?}", cookie.name());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cookie;
        }
    }

    fn remove(&self, name: &str) {
        self.set(removal_cookie(name));
    }
}

/// Find the value of `name` in a `document.cookie` style header string.
///
/// Values are percent-decoded, matching what [`BrowserCookies`] writes.
/// Malformed pairs are skipped.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

/// In-memory jar with a manually advanced clock.
#[cfg(test)]
#[derive(Debug)]
pub struct MemoryCookies {
    jar: RefCell<HashMap<String, Cookie<'static>>>,
    now: Cell<OffsetDateTime>,
}

#[cfg(test)]
impl MemoryCookies {
    pub fn new(now: OffsetDateTime) -> Self {
        Self { jar: RefCell::new(HashMap::new()), now: Cell::new(now) }
    }

    pub fn now(&self) -> OffsetDateTime {
        self.now.get()
    }

    /// Move the jar clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Last cookie written under `name`, including its attributes.
    pub fn written(&self, name: &str) -> Option<Cookie<'static>> {
        self.jar.borrow().get(name).cloned()
    }

    fn is_live(&self, cookie: &Cookie<'_>) -> bool {
        cookie.expires_datetime().is_none_or(|expires| self.now.get() < expires)
    }
}

#[cfg(test)]
impl CookieBackend for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.jar
            .borrow()
            .get(name)
            .filter(|cookie| self.is_live(cookie))
            .map(|cookie| cookie.value().to_owned())
    }

    fn set(&self, cookie: Cookie<'static>) {
        self.jar.borrow_mut().insert(cookie.name().to_owned(), cookie);
    }

    fn remove(&self, name: &str) {
        self.jar.borrow_mut().remove(name);
    }
}
