//! Pure validation predicates for the recovery forms.
//!
//! Every function is total: it never panics and always returns a message
//! string, where the empty string means the value passed. The messages are
//! the exact strings shown next to the form fields, so they are part of the
//! contract, not presentation detail.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` shape; whitespace and extra `@` are rejected.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

const SPECIAL_CHARS: &str = "!@#$%^&*";

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Invalid email address";
pub const MSG_OTP_REQUIRED: &str = "OTP is required";
pub const MSG_OTP_LENGTH: &str = "OTP must be 6 digits";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_WEAK: &str = "Password must be at least 8 characters long and include uppercase, lowercase, a number, and a special character";

/// Validate an email address. Empty result means valid.
pub fn validate_email(value: &str) -> String {
    if value.is_empty() {
        return MSG_EMAIL_REQUIRED.to_string();
    }
    if !EMAIL_PATTERN.is_match(value) {
        return MSG_EMAIL_INVALID.to_string();
    }
    String::new()
}

/// Validate a one-time passcode. Empty result means valid.
///
/// Only the character length is checked, not digit composition: the backend
/// is the authority on what a code contains, and six letters pass here.
pub fn validate_otp(value: &str) -> String {
    if value.is_empty() {
        return MSG_OTP_REQUIRED.to_string();
    }
    if value.chars().count() != 6 {
        return MSG_OTP_LENGTH.to_string();
    }
    String::new()
}

/// Validate password strength. Empty result means valid.
///
/// Five independent predicates; any failure yields the one combined message
/// naming all requirements.
pub fn validate_password(value: &str) -> String {
    if value.is_empty() {
        return MSG_PASSWORD_REQUIRED.to_string();
    }

    let long_enough = value.chars().count() >= 8;
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| SPECIAL_CHARS.contains(c));

    if !(long_enough && has_upper && has_lower && has_digit && has_special) {
        return MSG_PASSWORD_WEAK.to_string();
    }
    String::new()
}

/// Field-scoped validation results for the reset form.
///
/// An empty string per field means the field is valid; a submission may
/// reach the network only when every field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors {
    pub email: String,
    pub otp: String,
    pub password: String,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_empty() && self.otp.is_empty() && self.password.is_empty()
    }
}

/// Run all three predicates and return the full error map, never a partial
/// one.
pub fn validate_reset(email: &str, otp: &str, password: &str) -> FieldErrors {
    FieldErrors {
        email: validate_email(email),
        otp: validate_otp(otp),
        password: validate_password(password),
    }
}
