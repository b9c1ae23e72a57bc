//! Client-side login form validation.
//!
//! Rules run before any network call. Each field reports at most one
//! message: the required check wins over the format/length check.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::Credentials;

pub const PASSWORD_MIN_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "please enter your email";
pub const EMAIL_INVALID: &str = "email must be a valid email";
pub const PASSWORD_REQUIRED: &str = "please enter your password";
pub const PASSWORD_TOO_SHORT: &str = "password must be at least 8 characters";

// WHATWG `input[type=email]` grammar.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .map_err(|e| log::error!("email pattern failed to compile: {e}"))
    .ok()
});

/// Raw values as typed into the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Per-field validation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

fn check_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if value.chars().count() < PASSWORD_MIN_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

/// Validate the form and produce submittable credentials.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate_login(form: &LoginForm) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors { email: check_email(&form.email), password: check_password(&form.password) };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials { email: form.email.clone(), password: form.password.clone(), remember_me: form.remember_me })
}
