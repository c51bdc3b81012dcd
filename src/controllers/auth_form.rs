//! Login and sign-up forms

use std::sync::LazyLock;

use regex::Regex;

use crate::api::RegisterArgs;
use crate::error::FormError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const LOGIN_FAILED: &str = "Invalid credentials. Please try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// First failing rule wins, in field order
    pub fn validate(&self) -> Result<(), FormError> {
        if self.full_name.trim().is_empty() {
            return Err(FormError::FullNameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(FormError::EmailRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if self.password.chars().count() < 6 {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn as_args(&self) -> RegisterArgs<'_> {
        RegisterArgs {
            full_name: self.full_name.trim(),
            email: self.email.trim(),
            password: &self.password,
            confirm_password: &self.confirm_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SignupForm {
        SignupForm {
            full_name: "Ana Lima".into(),
            email: "ana@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_rules_in_order() {
        let blank_name = SignupForm { full_name: "  ".into(), email: String::new(), ..valid() };
        assert_eq!(blank_name.validate(), Err(FormError::FullNameRequired));

        let no_email = SignupForm { email: " ".into(), ..valid() };
        assert_eq!(no_email.validate(), Err(FormError::EmailRequired));

        let bad_email = SignupForm { email: "ana@example".into(), ..valid() };
        assert_eq!(bad_email.validate(), Err(FormError::InvalidEmail));

        let short = SignupForm { password: "12345".into(), confirm_password: "12345".into(), ..valid() };
        assert_eq!(short.validate(), Err(FormError::PasswordTooShort));

        let mismatch = SignupForm { confirm_password: "secret2".into(), ..valid() };
        assert_eq!(mismatch.validate(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("plain"));
    }
}
