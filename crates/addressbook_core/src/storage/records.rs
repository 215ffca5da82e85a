//! Serializable records for persons, tags and event-tags.
//!
//! # Responsibility
//! - Mirror the JSON wire shape of each entity with unvalidated fields.
//! - Validate and convert records into model entities on import.
//!
//! # Invariants
//! - Missing required fields are reported as `MalformedRecord`, never as a
//!   serde error, so the adapter owns every field-level message.
//! - `from_model` output converts back to an equal entity.

use crate::model::person::{Address, Email, Name, Person, Phone};
use crate::model::tag::{EventTag, Tag};
use crate::model::validation::ValidationError;
use crate::storage::adapter::{RecordAdapter, ReferenceScope};
use crate::storage::error::{DocumentError, DocumentResult, EntityKind};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire record for one tag, also used for tag references held by persons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRecord {
    pub tag_name: Option<String>,
}

impl TagRecord {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
        }
    }

    fn required_name(&self, kind: EntityKind) -> DocumentResult<&str> {
        self.tag_name
            .as_deref()
            .ok_or_else(|| DocumentError::missing_field(kind, "tagName"))
    }
}

impl RecordAdapter for TagRecord {
    type Model = Tag;
    const KIND: EntityKind = EntityKind::Tag;

    fn from_model(model: &Tag) -> Self {
        Self::new(model.name())
    }

    fn to_model(&self, _scope: &ReferenceScope<'_>) -> DocumentResult<Tag> {
        let name = self.required_name(Self::KIND)?;
        Tag::new(name).map_err(|err| DocumentError::malformed(Self::KIND, err))
    }
}

/// Wire record for one event-tag. Window bounds are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTagRecord {
    pub tag_name: Option<String>,
    pub event_start: Option<i64>,
    pub event_end: Option<i64>,
}

impl RecordAdapter for EventTagRecord {
    type Model = EventTag;
    const KIND: EntityKind = EntityKind::EventTag;

    fn from_model(model: &EventTag) -> Self {
        Self {
            tag_name: Some(model.name().to_string()),
            event_start: model.event_start(),
            event_end: model.event_end(),
        }
    }

    fn to_model(&self, _scope: &ReferenceScope<'_>) -> DocumentResult<EventTag> {
        let name = self
            .tag_name
            .as_deref()
            .ok_or_else(|| DocumentError::missing_field(Self::KIND, "tagName"))?;
        EventTag::with_window(name, self.event_start, self.event_end)
            .map_err(|err| DocumentError::malformed(Self::KIND, err))
    }
}

/// Wire record for one person.
///
/// Tag and event-tag references carry names only; the referenced entities
/// live in the document's own tag lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<TagRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub event_tags: Vec<TagRecord>,
}

impl PersonRecord {
    fn required<'a>(value: &'a Option<String>, field: &str) -> DocumentResult<&'a str> {
        value
            .as_deref()
            .ok_or_else(|| DocumentError::missing_field(EntityKind::Person, field))
    }
}

fn invalid_person_field(err: ValidationError) -> DocumentError {
    DocumentError::malformed(EntityKind::Person, err)
}

impl RecordAdapter for PersonRecord {
    type Model = Person;
    const KIND: EntityKind = EntityKind::Person;

    fn from_model(model: &Person) -> Self {
        Self {
            name: Some(model.name().to_string()),
            phone: Some(model.phone().to_string()),
            email: Some(model.email().to_string()),
            address: Some(model.address().to_string()),
            tags: model.tags().iter().map(TagRecord::from_model).collect(),
            event_tags: model
                .event_tags()
                .iter()
                .map(|name| TagRecord::new(name.as_str()))
                .collect(),
        }
    }

    fn to_model(&self, scope: &ReferenceScope<'_>) -> DocumentResult<Person> {
        let mut tags = Vec::with_capacity(self.tags.len());
        for record in &self.tags {
            tags.push(record.to_model(scope)?);
        }

        let mut event_tags = Vec::with_capacity(self.event_tags.len());
        for record in &self.event_tags {
            event_tags.push(record.required_name(EntityKind::EventTag)?);
        }

        let name = Name::parse(Self::required(&self.name, "Name")?).map_err(invalid_person_field)?;
        let phone =
            Phone::parse(Self::required(&self.phone, "Phone")?).map_err(invalid_person_field)?;
        let email =
            Email::parse(Self::required(&self.email, "Email")?).map_err(invalid_person_field)?;
        let address = Address::parse(Self::required(&self.address, "Address")?)
            .map_err(invalid_person_field)?;

        let person = Person::new(name, phone, email, address)
            .with_tags(tags)
            .with_event_tags(event_tags)
            .map_err(|err| DocumentError::malformed(EntityKind::EventTag, err))?;

        for tag in person.tags() {
            scope.resolve_tag(tag.name())?;
        }
        for event_tag in person.event_tags() {
            scope.resolve_event_tag(event_tag)?;
        }
        Ok(person)
    }
}

/// Deserializes an absent-or-null array as an empty vector.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
