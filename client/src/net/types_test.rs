use super::*;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_remember_me_in_camel_case() {
    let creds = Credentials {
        email: "user@test.com".to_owned(),
        password: "hunter2hunter2".to_owned(),
        remember_me: true,
    };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "email": "user@test.com",
            "password": "hunter2hunter2",
            "rememberMe": true,
        })
    );
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials {
        email: "user@test.com".to_owned(),
        password: "super-secret-pw".to_owned(),
        remember_me: false,
    };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("user@test.com"));
    assert!(!rendered.contains("super-secret-pw"));
}

// =============================================================
// AuthUser
// =============================================================

#[test]
fn auth_user_keeps_unknown_fields_in_profile() {
    let user: AuthUser = serde_json::from_value(serde_json::json!({
        "session_id": "sess-42",
        "uid": "u-7",
        "email": "dev@swob.test",
        "auth_key": "k",
    }))
    .unwrap();
    assert_eq!(user.session_id, "sess-42");
    assert_eq!(user.profile_str("uid"), Some("u-7"));
    assert_eq!(user.profile_str("email"), Some("dev@swob.test"));
    assert_eq!(user.profile.len(), 3);
}

#[test]
fn auth_user_requires_session_id() {
    let parsed = serde_json::from_value::<AuthUser>(serde_json::json!({ "uid": "u-7" }));
    assert!(parsed.is_err());
}

#[test]
fn profile_str_ignores_non_string_values() {
    let user: AuthUser =
        serde_json::from_value(serde_json::json!({ "session_id": "s", "verified": true })).unwrap();
    assert_eq!(user.profile_str("verified"), None);
    assert_eq!(user.profile_str("missing"), None);
}
