use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Per-field validation failures surfaced next to the inputs.
///
/// These are user-input problems, not system faults: they are stored on the
/// form, rendered inline, and cleared as the user corrects the field. The
/// display strings are part of the form's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Date is required")]
    DateRequired,
    #[error("Time is required")]
    TimeRequired,
}

/// Broad classification of a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was left empty.
    MissingField,
    /// A filled field does not match the expected shape.
    InvalidFormat,
}

impl FieldError {
    /// The display string as a `&'static str`, for widgets that borrow.
    pub fn message(self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required",
            Self::EmailRequired => "Email is required",
            Self::EmailInvalid => "Email is invalid",
            Self::DateRequired => "Date is required",
            Self::TimeRequired => "Time is required",
        }
    }

    pub fn kind(self) -> ErrorKind {
        match self {
            Self::EmailInvalid => ErrorKind::InvalidFormat,
            Self::NameRequired | Self::EmailRequired | Self::DateRequired | Self::TimeRequired => {
                ErrorKind::MissingField
            }
        }
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Returns `true` if `email` has a `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- is_valid_email ---

    #[test]
    fn plain_address_is_valid() {
        assert!(is_valid_email("priya@example.com"));
    }

    #[test]
    fn short_domain_is_valid() {
        assert!(is_valid_email("r@x.com"));
    }

    #[test]
    fn missing_at_is_invalid() {
        assert!(!is_valid_email("priya.example.com"));
    }

    #[test]
    fn missing_tld_is_invalid() {
        assert!(!is_valid_email("priya@example"));
    }

    #[test]
    fn embedded_space_is_invalid() {
        assert!(!is_valid_email("pri ya@example.com"));
    }

    #[test]
    fn double_at_is_invalid() {
        assert!(!is_valid_email("priya@@example.com"));
    }

    #[test]
    fn empty_is_invalid() {
        assert!(!is_valid_email(""));
    }

    #[quickcheck]
    fn constructed_local_at_domain_dot_tld_is_valid(local: u8, domain: u8, tld: u8) -> bool {
        // Build each part from a non-empty run of lowercase letters.
        let part = |len: u8| -> String {
            (0..(len % 8) + 1)
                .map(|i| (b'a' + (i % 26)) as char)
                .collect()
        };
        let email = format!("{}@{}.{}", part(local), part(domain), part(tld));
        is_valid_email(&email)
    }

    #[quickcheck]
    fn address_without_at_never_valid(s: String) -> bool {
        let stripped: String = s.chars().filter(|c| *c != '@').collect();
        !is_valid_email(&stripped)
    }

    // --- kind ---

    #[test]
    fn only_invalid_email_is_a_format_error() {
        assert_eq!(FieldError::EmailInvalid.kind(), ErrorKind::InvalidFormat);
        for e in [
            FieldError::NameRequired,
            FieldError::EmailRequired,
            FieldError::DateRequired,
            FieldError::TimeRequired,
        ] {
            assert_eq!(e.kind(), ErrorKind::MissingField);
        }
    }

    #[test]
    fn message_matches_display() {
        for e in [
            FieldError::NameRequired,
            FieldError::EmailRequired,
            FieldError::EmailInvalid,
            FieldError::DateRequired,
            FieldError::TimeRequired,
        ] {
            assert_eq!(e.message(), e.to_string());
        }
    }

    #[test]
    fn display_strings_match_contract() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(FieldError::EmailInvalid.to_string(), "Email is invalid");
        assert_eq!(FieldError::DateRequired.to_string(), "Date is required");
        assert_eq!(FieldError::TimeRequired.to_string(), "Time is required");
    }
}
