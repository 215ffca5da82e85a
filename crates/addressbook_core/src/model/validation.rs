//! Field-level validation rules shared by model value types.
//!
//! # Responsibility
//! - Own the regex rules for tag names and person fields.
//! - Provide one error type with user-facing constraint messages.
//!
//! # Invariants
//! - Rules see raw values; whitespace is significant except for the blank
//!   check on addresses.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Constraint text for tag and event-tag names.
pub const TAG_NAME_CONSTRAINTS: &str = "Tags names should be alphanumeric";
/// Constraint text for person names.
pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
/// Constraint text for phone numbers.
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
/// Constraint text for email addresses.
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.-, \
and may not start or end with a special character. The domain is made of labels separated by \
periods; each label is alphanumeric with optional inner hyphens, and the last label must be at \
least 2 characters long";
/// Constraint text for addresses.
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\p{Nd}]+$").expect("valid tag name regex"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Alphabetic}\p{Nd}][\p{Alphabetic}\p{Nd} ]*$").expect("valid name regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_LOCAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9+_.\-]*[A-Za-z0-9])?$").expect("valid email local regex")
});
static EMAIL_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?$").expect("valid email label regex")
});

/// Returns whether `value` is a legal tag or event-tag name.
pub fn is_valid_tag_name(value: &str) -> bool {
    TAG_NAME_RE.is_match(value)
}

/// Returns whether `value` is a legal person name.
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Returns whether `value` is a legal phone number.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Returns whether `value` is a legal email address.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if !EMAIL_LOCAL_RE.is_match(local) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some(last) = labels.last() else {
        return false;
    };
    if last.chars().count() < 2 {
        return false;
    }
    labels.iter().all(|label| EMAIL_LABEL_RE.is_match(label))
}

/// Returns whether `value` is a legal address.
pub fn is_valid_address(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Model field validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidTagName(String),
    InvalidEventWindow { start: i64, end: i64 },
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    BlankAddress,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTagName(_) => write!(f, "{TAG_NAME_CONSTRAINTS}"),
            Self::InvalidEventWindow { start, end } => {
                write!(f, "event_end ({end}) must be >= event_start ({start})")
            }
            Self::InvalidName(_) => write!(f, "{NAME_CONSTRAINTS}"),
            Self::InvalidPhone(_) => write!(f, "{PHONE_CONSTRAINTS}"),
            Self::InvalidEmail(_) => write!(f, "{EMAIL_CONSTRAINTS}"),
            Self::BlankAddress => write!(f, "{ADDRESS_CONSTRAINTS}"),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{
        is_valid_address, is_valid_email, is_valid_name, is_valid_phone, is_valid_tag_name,
        ValidationError, TAG_NAME_CONSTRAINTS,
    };

    #[test]
    fn tag_names_must_be_alphanumeric() {
        assert!(is_valid_tag_name("friends"));
        assert!(is_valid_tag_name("CS2103"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("best friends"));
        assert!(!is_valid_tag_name("#hash"));
    }

    #[test]
    fn names_allow_inner_spaces_but_not_leading_blank() {
        assert!(is_valid_name("Alex Yeoh"));
        assert!(is_valid_name("David Li 2nd"));
        assert!(!is_valid_name(" Alex"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("peter*"));
    }

    #[test]
    fn phones_need_three_digits() {
        assert!(is_valid_phone("911"));
        assert!(is_valid_phone("87438807"));
        assert!(!is_valid_phone("91"));
        assert!(!is_valid_phone("9011p041"));
        assert!(!is_valid_phone("9312 1534"));
    }

    #[test]
    fn emails_follow_local_at_domain_shape() {
        assert!(is_valid_email("alexyeoh@example.com"));
        assert!(is_valid_email("a+b_c.d-e@mail-server.co"));
        assert!(!is_valid_email("alexyeoh"));
        assert!(!is_valid_email("-alex@example.com"));
        assert!(!is_valid_email("alex@example.c"));
        assert!(!is_valid_email("alex@-example.com"));
        assert!(!is_valid_email("alex@example..com"));
    }

    #[test]
    fn addresses_reject_blank_values() {
        assert!(is_valid_address("Blk 30 Geylang Street 29, #06-40"));
        assert!(!is_valid_address("   "));
    }

    #[test]
    fn display_uses_constraint_messages() {
        let err = ValidationError::InvalidTagName("a b".to_string());
        assert_eq!(err.to_string(), TAG_NAME_CONSTRAINTS);

        let err = ValidationError::InvalidEventWindow {
            start: 200,
            end: 100,
        };
        assert_eq!(err.to_string(), "event_end (100) must be >= event_start (200)");
    }
}
