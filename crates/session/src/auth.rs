//! Demo-mode credential checks for the login and signup forms.
//!
//! No identity store is consulted: any syntactically valid address is
//! accepted. Validators are pure functions of their inputs and report only
//! the first applicable violation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Minimum signup password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// `local@domain.tld`, with a TLD of at least two letters
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// A form rule that blocks submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthViolation {
    InvalidEmail,
    PasswordMismatch,
    PasswordTooShort,
}

impl AuthViolation {
    pub fn message(&self) -> &'static str {
        match self {
            AuthViolation::InvalidEmail => "Please enter a valid email address.",
            AuthViolation::PasswordMismatch => "Passwords do not match.",
            AuthViolation::PasswordTooShort => "Password must be at least 6 characters.",
        }
    }
}

impl fmt::Display for AuthViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Signup rules, in precedence order: email, mismatch, length.
///
/// Each rule applies only once its inputs have been filled in.
pub fn validate_signup(email: &str, password: &str, confirmation: &str) -> Option<AuthViolation> {
    if !email.is_empty() && !validate_email(email) {
        Some(AuthViolation::InvalidEmail)
    } else if !password.is_empty() && !confirmation.is_empty() && password != confirmation {
        Some(AuthViolation::PasswordMismatch)
    } else if !password.is_empty() && password.chars().count() < MIN_PASSWORD_LEN {
        Some(AuthViolation::PasswordTooShort)
    } else {
        None
    }
}

/// Login only checks the email format
pub fn validate_login(email: &str) -> Option<AuthViolation> {
    (!email.is_empty() && !validate_email(email)).then_some(AuthViolation::InvalidEmail)
}

/// Inputs of the signup page
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

impl SignupForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }

    pub fn violation(&self) -> Option<AuthViolation> {
        validate_signup(&self.email, &self.password, &self.confirmation)
    }

    /// All fields present and no violation
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirmation.is_empty()
            && self.violation().is_none()
    }
}

/// Inputs of the login page
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn violation(&self) -> Option<AuthViolation> {
        validate_login(&self.email)
    }

    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && self.violation().is_none()
    }
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("confirmation", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last+tag@mail.example.org"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        // Single-letter TLDs are rejected
        assert!(!validate_email("a@b.c"));
        assert!(!validate_email("a b@c.de"));
    }

    #[test]
    fn test_short_password_even_when_confirmed() {
        assert_eq!(
            validate_signup("me@example.com", "abc", "abc"),
            Some(AuthViolation::PasswordTooShort)
        );
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            validate_signup("me@example.com", "abcdef", "abcdeg"),
            Some(AuthViolation::PasswordMismatch)
        );
    }

    #[test]
    fn test_precedence_email_first() {
        assert_eq!(
            validate_signup("bad", "abc", "xyz"),
            Some(AuthViolation::InvalidEmail)
        );
        assert_eq!(
            validate_signup("me@example.com", "abc", "xyz"),
            Some(AuthViolation::PasswordMismatch)
        );
    }

    #[test]
    fn test_rules_wait_for_input() {
        assert_eq!(validate_signup("", "", ""), None);
        assert_eq!(validate_signup("", "abcdef", ""), None);
        assert_eq!(validate_signup("", "abc", ""), Some(AuthViolation::PasswordTooShort));
    }

    #[test]
    fn test_signup_form_submit_gate() {
        assert!(SignupForm::new("me@example.com", "secret1", "secret1").can_submit());
        assert!(!SignupForm::new("me@example.com", "secret1", "").can_submit());
        assert!(!SignupForm::new("me@example.com", "secret1", "secret2").can_submit());
    }

    #[test]
    fn test_login_form_submit_gate() {
        assert!(LoginForm::new("me@example.com", "x").can_submit());
        assert!(!LoginForm::new("me@example.com", "").can_submit());
        assert_eq!(LoginForm::new("nope", "x").violation(), Some(AuthViolation::InvalidEmail));
    }

    #[test]
    fn test_debug_hides_passwords() {
        let login = format!("{:?}", LoginForm::new("me@example.com", "hunter22secret"));
        assert!(login.contains("me@example.com"));
        assert!(!login.contains("hunter22secret"));

        let signup = format!("{:?}", SignupForm::new("me@example.com", "pw-one-1", "pw-two-2"));
        assert!(!signup.contains("pw-one-1"));
        assert!(!signup.contains("pw-two-2"));
    }
}
