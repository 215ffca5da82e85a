//! Person domain model and its validated field values.
//!
//! # Invariants
//! - Every field value type can only be built through its validating `parse`.
//! - Two persons are *the same person* when their names are equal; other
//!   fields may differ.
//! - Tag and event-tag references are kept sorted and unique.

use crate::model::tag::Tag;
use crate::model::validation::{
    is_valid_address, is_valid_email, is_valid_name, is_valid_phone, is_valid_tag_name,
    ValidationError,
};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

macro_rules! field_value {
    ($(#[$meta:meta])* $ty:ident, $check:ident, $err:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $ty(String);

        impl $ty {
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if !$check(&value) {
                    return Err($err(value));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

field_value!(
    /// Person display name; also the person identity key.
    Name,
    is_valid_name,
    ValidationError::InvalidName
);
field_value!(Phone, is_valid_phone, ValidationError::InvalidPhone);
field_value!(Email, is_valid_email, ValidationError::InvalidEmail);
field_value!(Address, is_valid_address, blank_address);

fn blank_address(_value: String) -> ValidationError {
    ValidationError::BlankAddress
}

/// One contact in the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    event_tags: BTreeSet<String>,
}

impl Person {
    /// Creates a person with no tag references.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: BTreeSet::new(),
            event_tags: BTreeSet::new(),
        }
    }

    /// Replaces the tag references.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Replaces the event-tag references, validating each name.
    pub fn with_event_tags<I, S>(mut self, names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut event_tags = BTreeSet::new();
        for name in names {
            let name = name.into();
            if !is_valid_tag_name(&name) {
                return Err(ValidationError::InvalidTagName(name));
            }
            event_tags.insert(name);
        }
        self.event_tags = event_tags;
        Ok(self)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Tag references in name order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Event-tag names in name order.
    pub fn event_tags(&self) -> &BTreeSet<String> {
        &self.event_tags
    }

    /// Identity check used for duplicate detection.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}
