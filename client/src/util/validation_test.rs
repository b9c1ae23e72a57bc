use super::*;

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned(), remember_me: false }
}

// =============================================================
// Email
// =============================================================

#[test]
fn accepts_common_addresses() {
    for email in ["user@test.com", "first.last+tag@sub.example.org", "a@b"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in ["user", "user@", "@test.com", "user test@test.com", "user@-test.com", "user@@test.com"] {
        assert!(!is_valid_email(email), "{email}");
    }
}

// =============================================================
// validate_login
// =============================================================

#[test]
fn valid_form_produces_credentials() {
    let mut input = form("user@test.com", "correct-horse");
    input.remember_me = true;
    let creds = validate_login(&input).unwrap();
    assert_eq!(creds.email, "user@test.com");
    assert_eq!(creds.password, "correct-horse");
    assert!(creds.remember_me);
}

#[test]
fn short_password_reports_length_message() {
    let errors = validate_login(&form("user@test.com", "short")).unwrap_err();
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
}

#[test]
fn password_of_exactly_min_length_passes() {
    assert!(validate_login(&form("user@test.com", "12345678")).is_ok());
    assert!(validate_login(&form("user@test.com", "1234567")).is_err());
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(validate_login(&form("user@test.com", "pässwörd")).is_ok());
}

#[test]
fn empty_fields_report_required_messages() {
    let errors = validate_login(&form("", "")).unwrap_err();
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
}

#[test]
fn malformed_email_reports_format_message() {
    let errors = validate_login(&form("not-an-email", "long-enough-pw")).unwrap_err();
    assert_eq!(errors.email, Some(EMAIL_INVALID));
    assert_eq!(errors.password, None);
}

#[test]
fn field_errors_default_is_empty() {
    assert!(FieldErrors::default().is_empty());
    assert!(!FieldErrors { email: Some(EMAIL_REQUIRED), password: None }.is_empty());
}
