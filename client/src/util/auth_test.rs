use super::*;

fn intent(path: &str) -> NavigationIntent {
    NavigationIntent::new(path).unwrap()
}

// =============================================================
// NavigationIntent
// =============================================================

#[test]
fn intent_accepts_absolute_paths() {
    assert_eq!(intent("/dashboard/docs").path(), "/dashboard/docs");
    assert_eq!(intent("/dashboard/docs?tab=api").path(), "/dashboard/docs?tab=api");
}

#[test]
fn intent_rejects_relative_and_external_targets() {
    assert!(NavigationIntent::new("dashboard").is_none());
    assert!(NavigationIntent::new("https://evil.test/").is_none());
    assert!(NavigationIntent::new("//evil.test/").is_none());
    assert!(NavigationIntent::new("/\\evil.test").is_none());
    assert!(NavigationIntent::new("").is_none());
}

#[test]
fn intent_rejects_login_route() {
    assert!(NavigationIntent::new("/login").is_none());
    assert!(NavigationIntent::new("/login/").is_none());
    assert!(NavigationIntent::new("/login?next=%2Fx").is_none());
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn login_redirect_encodes_requested_path() {
    assert_eq!(login_redirect("/dashboard/docs"), "/login?next=%2Fdashboard%2Fdocs");
}

#[test]
fn login_redirect_drops_unusable_intent() {
    assert_eq!(login_redirect("/login"), "/login");
}

#[test]
fn post_login_prefers_intent() {
    assert_eq!(post_login_target(Some(&intent("/dashboard/credentials"))), "/dashboard/credentials");
    assert_eq!(post_login_target(None), "/dashboard");
}

#[test]
fn mount_with_session_and_intent_goes_to_intent() {
    assert_eq!(mount_redirect(true, Some(&intent("/dashboard/docs"))), Some("/dashboard/docs".to_owned()));
}

#[test]
fn mount_with_session_without_intent_goes_to_dashboard() {
    assert_eq!(mount_redirect(true, None), Some("/dashboard".to_owned()));
}

#[test]
fn mount_without_session_renders_form() {
    assert_eq!(mount_redirect(false, Some(&intent("/dashboard/docs"))), None);
    assert_eq!(mount_redirect(false, None), None);
}
