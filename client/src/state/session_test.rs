use super::*;
use crate::util::cookies::MemoryCookies;

fn t0() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
}

// =============================================================
// Session validity
// =============================================================

#[test]
fn session_valid_strictly_before_expiry() {
    let session = Session { id: "s".to_owned(), expires_at: t0() };
    assert!(session.is_valid_at(t0() - Duration::seconds(1)));
    assert!(!session.is_valid_at(t0()));
    assert!(!session.is_valid_at(t0() + Duration::seconds(1)));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn create_sets_named_cookie_two_hours_ahead() {
    let jar = MemoryCookies::new(t0());
    let store = SessionStore::new(&jar);

    let session = store.create("sess-1", t0());

    assert_eq!(session.id, "sess-1");
    assert_eq!(session.expires_at, t0() + Duration::hours(2));

    let cookie = jar.written(SESSION_COOKIE_NAME).unwrap();
    assert_eq!(cookie.name(), "SWOB-DEV-FE");
    assert_eq!(cookie.value(), "sess-1");
    assert_eq!(cookie.max_age(), Some(Duration::seconds(7_200)));
    assert_eq!(cookie.expires_datetime(), Some(t0() + Duration::hours(2)));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn current_reads_back_created_session() {
    let jar = MemoryCookies::new(t0());
    let store = SessionStore::new(&jar);
    assert_eq!(store.current(), None);

    store.create("sess-2", t0());
    assert_eq!(store.current(), Some("sess-2".to_owned()));
    assert!(store.current().is_some());
}

#[test]
fn session_disappears_after_ttl() {
    let jar = MemoryCookies::new(t0());
    let store = SessionStore::new(&jar);
    store.create("sess-3", t0());

    jar.advance(Duration::hours(2) - Duration::seconds(1));
    assert!(store.current().is_some());

    jar.advance(Duration::seconds(1));
    assert!(store.current().is_none());
}

#[test]
fn empty_cookie_value_is_not_a_session() {
    let jar = MemoryCookies::new(t0());
    jar.set(Cookie::new(SESSION_COOKIE_NAME, ""));
    assert_eq!(SessionStore::new(&jar).current(), None);
}

#[test]
fn clear_removes_session() {
    let jar = MemoryCookies::new(t0());
    let store = SessionStore::new(&jar);
    store.create("sess-4", t0());
    store.clear();
    assert_eq!(store.current(), None);
}

// =============================================================
// Cookie builders
// =============================================================

#[test]
fn session_cookie_serializes_attributes() {
    let rendered = session_cookie("abc", OffsetDateTime::UNIX_EPOCH).to_string();
    assert!(rendered.starts_with("SWOB-DEV-FE=abc"));
    assert!(rendered.contains("Max-Age=7200"));
    assert!(rendered.contains("Path=/"));
    assert!(rendered.contains("SameSite=Lax"));
}

#[test]
fn removal_cookie_expires_immediately() {
    let cookie = removal_cookie(SESSION_COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
}
