//! Record adapter contract and reference resolution scope.

use crate::config::ReferencePolicy;
use crate::model::address_book::AddressBook;
use crate::storage::error::{DocumentError, DocumentResult, EntityKind};

/// Converts one serializable record to and from its model entity.
pub trait RecordAdapter: Sized {
    /// Model entity produced by this record.
    type Model;

    /// Entity category reported in failures.
    const KIND: EntityKind;

    /// Builds a record from a live model entity. Never fails.
    fn from_model(model: &Self::Model) -> Self;

    /// Validates this record and converts it to a model entity.
    ///
    /// # Errors
    /// - `MalformedRecord` when a field is missing or violates its constraint.
    /// - `UnresolvedReference` when `scope` is strict and a reference is unknown.
    fn to_model(&self, scope: &ReferenceScope<'_>) -> DocumentResult<Self::Model>;
}

/// Model state visible to an adapter while converting one record.
pub struct ReferenceScope<'book> {
    book: &'book AddressBook,
    policy: ReferencePolicy,
}

impl<'book> ReferenceScope<'book> {
    pub fn new(book: &'book AddressBook, policy: ReferencePolicy) -> Self {
        Self { book, policy }
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    /// Checks that a tag name is known to the model under a strict policy.
    pub fn resolve_tag(&self, name: &str) -> DocumentResult<()> {
        self.resolve(EntityKind::Tag, name, self.book.has_tag_named(name))
    }

    /// Checks that an event-tag name is known to the model under a strict policy.
    pub fn resolve_event_tag(&self, name: &str) -> DocumentResult<()> {
        self.resolve(EntityKind::EventTag, name, self.book.has_event_tag_named(name))
    }

    fn resolve(&self, kind: EntityKind, name: &str, known: bool) -> DocumentResult<()> {
        if self.policy == ReferencePolicy::Lenient || known {
            return Ok(());
        }
        Err(DocumentError::UnresolvedReference {
            kind,
            name: name.to_string(),
        })
    }
}

/// Converts each model entity into its record, preserving order.
pub fn export_records<R: RecordAdapter>(models: &[R::Model]) -> Vec<R> {
    models.iter().map(R::from_model).collect()
}
