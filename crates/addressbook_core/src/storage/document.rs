//! Address-book document: the serializable root of a persisted address book.
//!
//! # Responsibility
//! - Export a model snapshot into an ordered, serializable document.
//! - Import a document into a fresh `AddressBook`, rejecting malformed
//!   records and duplicate entities.
//!
//! # Invariants
//! - Import order is tags, then event-tags, then persons. Person adapters
//!   resolve references against the model built so far, so this order is a
//!   precondition of reference checking, not a cosmetic choice.
//! - Import is all-or-nothing: no partially populated model is returned.
//! - Under the lenient policy, tags and event-tags a person references but
//!   the document never defines are added to the model, so every imported
//!   model round-trips under the strict policy.
//! - Export never fails and holds no reference to its source.

use crate::config::{ImportOptions, ReferencePolicy};
use crate::model::address_book::{AddressBook, ReadOnlyAddressBook};
use crate::storage::adapter::{export_records, RecordAdapter, ReferenceScope};
use crate::storage::error::{DocumentError, DocumentResult, EntityKind};
use crate::storage::records::{null_as_empty, EventTagRecord, PersonRecord, TagRecord};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Serializable address book.
///
/// Wire members are `persons`, `tagList` and `eventTagList`; each may be
/// absent or null and then reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    persons: Vec<PersonRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    tag_list: Vec<TagRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    event_tag_list: Vec<EventTagRecord>,
}

impl AddressBookDocument {
    /// Builds a document from already-constructed record lists.
    pub fn new(
        tags: Vec<TagRecord>,
        event_tags: Vec<EventTagRecord>,
        persons: Vec<PersonRecord>,
    ) -> Self {
        Self {
            persons,
            tag_list: tags,
            event_tag_list: event_tags,
        }
    }

    /// Exports a model snapshot.
    ///
    /// Later changes to `source` do not affect the returned document.
    pub fn from_model(source: &impl ReadOnlyAddressBook) -> Self {
        let document = Self {
            persons: export_records::<PersonRecord>(source.person_list()),
            tag_list: export_records::<TagRecord>(source.tag_list()),
            event_tag_list: export_records::<EventTagRecord>(source.event_tag_list()),
        };
        debug!(
            "event=document_export module=storage status=ok tags={} event_tags={} persons={}",
            document.tag_list.len(),
            document.event_tag_list.len(),
            document.persons.len()
        );
        document
    }

    pub fn tags(&self) -> &[TagRecord] {
        &self.tag_list
    }

    pub fn event_tags(&self) -> &[EventTagRecord] {
        &self.event_tag_list
    }

    pub fn persons(&self) -> &[PersonRecord] {
        &self.persons
    }

    pub fn is_empty(&self) -> bool {
        self.tag_list.is_empty() && self.event_tag_list.is_empty() && self.persons.is_empty()
    }

    /// Imports this document with default options (strict references).
    pub fn to_model(&self) -> DocumentResult<AddressBook> {
        self.to_model_with(&ImportOptions::default())
    }

    /// Imports this document into a new address book.
    ///
    /// # Errors
    /// - `MalformedRecord` / `UnresolvedReference` from the first record
    ///   whose adapter rejects it, unchanged.
    /// - `DuplicateEntity` when a converted entity is already present.
    pub fn to_model_with(&self, options: &ImportOptions) -> DocumentResult<AddressBook> {
        match self.import(options) {
            Ok(book) => {
                info!(
                    "event=document_import module=storage status=ok policy={} tags={} event_tags={} persons={}",
                    options.reference_policy.as_str(),
                    book.tag_count(),
                    book.event_tag_count(),
                    book.person_count()
                );
                Ok(book)
            }
            Err(err) => {
                warn!(
                    "event=document_import module=storage status=error policy={} reason={} kind={}",
                    options.reference_policy.as_str(),
                    err.reason(),
                    err.kind().map_or("none", EntityKind::as_str)
                );
                Err(err)
            }
        }
    }

    fn import(&self, options: &ImportOptions) -> DocumentResult<AddressBook> {
        let policy = options.reference_policy;
        let mut book = AddressBook::new();

        for record in &self.tag_list {
            let tag = record.to_model(&ReferenceScope::new(&book, policy))?;
            if book.has_tag(&tag) {
                return Err(DocumentError::duplicate(EntityKind::Tag));
            }
            book.add_tag(tag)?;
        }

        for record in &self.event_tag_list {
            let event_tag = record.to_model(&ReferenceScope::new(&book, policy))?;
            if book.has_event_tag(&event_tag) {
                return Err(DocumentError::duplicate(EntityKind::EventTag));
            }
            book.add_event_tag(event_tag)?;
        }

        for record in &self.persons {
            let person = record.to_model(&ReferenceScope::new(&book, policy))?;
            if book.has_person(&person) {
                return Err(DocumentError::duplicate(EntityKind::Person));
            }
            if policy == ReferencePolicy::Lenient {
                book.add_missing_references(&person)?;
            }
            book.add_person(person)?;
        }

        Ok(book)
    }

    /// Parses a document from JSON text.
    pub fn from_json_str(json: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this document as pretty-printed JSON.
    pub fn to_json_string(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Document wrapped under the conventional `addressbook` root key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookEnvelope {
    #[serde(default)]
    pub addressbook: AddressBookDocument,
}

impl AddressBookEnvelope {
    pub fn into_document(self) -> AddressBookDocument {
        self.addressbook
    }
}

impl From<AddressBookDocument> for AddressBookEnvelope {
    fn from(value: AddressBookDocument) -> Self {
        Self { addressbook: value }
    }
}
