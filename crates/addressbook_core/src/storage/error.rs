//! Document conversion errors.

use crate::model::address_book::ModelError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed user-facing message for duplicate tag records.
pub const MESSAGE_DUPLICATE_TAG: &str = "Tags list contains duplicate tag(s).";
/// Fixed user-facing message for duplicate event-tag records.
pub const MESSAGE_DUPLICATE_EVENT_TAG: &str = "Events tag list contains duplicate event tag(s).";
/// Fixed user-facing message for duplicate person records.
pub const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Entity category a record or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Tag,
    EventTag,
    Person,
}

impl EntityKind {
    /// Label used in missing-field messages, e.g. `Person's Name field is missing!`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tag => "Tag",
            Self::EventTag => "EventTag",
            Self::Person => "Person",
        }
    }

    /// Stable snake_case id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::EventTag => "event_tag",
            Self::Person => "person",
        }
    }

    fn duplicate_message(self) -> &'static str {
        match self {
            Self::Tag => MESSAGE_DUPLICATE_TAG,
            Self::EventTag => MESSAGE_DUPLICATE_EVENT_TAG,
            Self::Person => MESSAGE_DUPLICATE_PERSON,
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised while converting an `AddressBookDocument`.
///
/// Callers branch on the variant; `Display` text is for users only.
#[derive(Debug)]
pub enum DocumentError {
    /// A record's fields cannot be converted to its model type.
    MalformedRecord { kind: EntityKind, detail: String },
    /// A converted entity already exists in the model being built.
    DuplicateEntity { kind: EntityKind },
    /// A person names a tag or event-tag absent from the model.
    UnresolvedReference { kind: EntityKind, name: String },
    /// The model rejected an insert.
    Model(ModelError),
    /// The JSON text is not a well-formed document.
    Json(serde_json::Error),
}

impl DocumentError {
    pub(crate) fn malformed(kind: EntityKind, detail: impl Display) -> Self {
        Self::MalformedRecord {
            kind,
            detail: detail.to_string(),
        }
    }

    pub(crate) fn missing_field(kind: EntityKind, field: &str) -> Self {
        Self::MalformedRecord {
            kind,
            detail: format!("{}'s {field} field is missing!", kind.label()),
        }
    }

    pub(crate) fn duplicate(kind: EntityKind) -> Self {
        Self::DuplicateEntity { kind }
    }

    /// Entity category involved, when the failure concerns one record.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::MalformedRecord { kind, .. }
            | Self::DuplicateEntity { kind }
            | Self::UnresolvedReference { kind, .. } => Some(*kind),
            Self::Model(_) | Self::Json(_) => None,
        }
    }

    /// Stable snake_case reason used in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "malformed_record",
            Self::DuplicateEntity { .. } => "duplicate_entity",
            Self::UnresolvedReference { .. } => "unresolved_reference",
            Self::Model(_) => "model_rejected",
            Self::Json(_) => "invalid_json",
        }
    }
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRecord { detail, .. } => write!(f, "{detail}"),
            Self::DuplicateEntity { kind } => write!(f, "{}", kind.duplicate_message()),
            Self::UnresolvedReference { kind, name } => match kind {
                EntityKind::EventTag => write!(f, "Person references unknown event tag: {name}"),
                _ => write!(f, "Person references unknown tag: {name}"),
            },
            Self::Model(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid address book JSON: {err}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for DocumentError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentError, EntityKind, MESSAGE_DUPLICATE_EVENT_TAG, MESSAGE_DUPLICATE_PERSON};

    #[test]
    fn duplicate_messages_are_fixed_per_kind() {
        assert_eq!(
            DocumentError::duplicate(EntityKind::Person).to_string(),
            MESSAGE_DUPLICATE_PERSON
        );
        assert_eq!(
            DocumentError::duplicate(EntityKind::EventTag).to_string(),
            MESSAGE_DUPLICATE_EVENT_TAG
        );
    }

    #[test]
    fn missing_field_message_names_kind_and_field() {
        let err = DocumentError::missing_field(EntityKind::Person, "Phone");
        assert_eq!(err.to_string(), "Person's Phone field is missing!");
        assert_eq!(err.kind(), Some(EntityKind::Person));
        assert_eq!(err.reason(), "malformed_record");
    }
}
