//! Tag and event-tag domain values.
//!
//! # Invariants
//! - Names always satisfy `is_valid_tag_name`.
//! - `event_end` is never earlier than `event_start` when both are set.
//! - Tags compare by name; event-tags are *the same* event-tag when their
//!   names match, even if their windows differ.

use crate::model::validation::{is_valid_tag_name, ValidationError};
use std::fmt::{Display, Formatter};

/// A plain label attached to persons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a tag after validating its name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_valid_tag_name(&name) {
            return Err(ValidationError::InvalidTagName(name));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// A tag describing an event, with an optional time window.
///
/// Window bounds are Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTag {
    name: String,
    event_start: Option<i64>,
    event_end: Option<i64>,
}

impl EventTag {
    /// Creates an event-tag without a time window.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_window(name, None, None)
    }

    /// Creates an event-tag with an optional start/end window.
    ///
    /// # Errors
    /// - `InvalidTagName` when the name is not alphanumeric.
    /// - `InvalidEventWindow` when both bounds are set and `end < start`.
    pub fn with_window(
        name: impl Into<String>,
        event_start: Option<i64>,
        event_end: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_valid_tag_name(&name) {
            return Err(ValidationError::InvalidTagName(name));
        }
        if let (Some(start), Some(end)) = (event_start, event_end) {
            if end < start {
                return Err(ValidationError::InvalidEventWindow { start, end });
            }
        }
        Ok(Self {
            name,
            event_start,
            event_end,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn event_start(&self) -> Option<i64> {
        self.event_start
    }

    pub fn event_end(&self) -> Option<i64> {
        self.event_end
    }

    /// Identity check used for duplicate detection.
    pub fn is_same_event_tag(&self, other: &EventTag) -> bool {
        self.name == other.name
    }
}

impl Display for EventTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
