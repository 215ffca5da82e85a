//! Address-book aggregate.
//!
//! # Responsibility
//! - Hold ordered, unique lists of tags, event-tags and persons.
//! - Expose membership predicates and inserts used by the storage layer.
//!
//! # Invariants
//! - No two tags are equal, no two event-tags share a name, no two persons
//!   share a name.
//! - Every tag and event-tag a person references is present in the book.
//! - Insert order is preserved and is the order returned by the list
//!   accessors.

use crate::model::person::Person;
use crate::model::tag::{EventTag, Tag};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Read-only view over an address book.
pub trait ReadOnlyAddressBook {
    /// Tags in insertion order.
    fn tag_list(&self) -> &[Tag];
    /// Event-tags in insertion order.
    fn event_tag_list(&self) -> &[EventTag];
    /// Persons in insertion order.
    fn person_list(&self) -> &[Person];
}

/// Uniqueness and lookup failures raised by `AddressBook` mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateTag(String),
    DuplicateEventTag(String),
    DuplicatePerson(String),
    PersonNotFound(String),
    UnknownTag(String),
    UnknownEventTag(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTag(name) => write!(f, "tag already exists: {name}"),
            Self::DuplicateEventTag(name) => write!(f, "event tag already exists: {name}"),
            Self::DuplicatePerson(name) => write!(f, "person already exists: {name}"),
            Self::PersonNotFound(name) => write!(f, "person not found: {name}"),
            Self::UnknownTag(name) => write!(f, "person references unknown tag: {name}"),
            Self::UnknownEventTag(name) => {
                write!(f, "person references unknown event tag: {name}")
            }
        }
    }
}

impl Error for ModelError {}

/// In-memory address book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    tags: Vec<Tag>,
    event_tags: Vec<EventTag>,
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns whether a tag with this exact name exists.
    pub fn has_tag_named(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name() == name)
    }

    pub fn has_event_tag(&self, event_tag: &EventTag) -> bool {
        self.event_tags
            .iter()
            .any(|existing| existing.is_same_event_tag(event_tag))
    }

    /// Returns whether an event-tag with this exact name exists.
    pub fn has_event_tag_named(&self, name: &str) -> bool {
        self.event_tags
            .iter()
            .any(|event_tag| event_tag.name() == name)
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|existing| existing.is_same_person(person))
    }

    /// Appends a tag.
    ///
    /// Callers are expected to check `has_tag` first; a collision is still
    /// rejected so the list stays unique.
    pub fn add_tag(&mut self, tag: Tag) -> Result<(), ModelError> {
        if self.has_tag(&tag) {
            return Err(ModelError::DuplicateTag(tag.name().to_string()));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Appends an event-tag. See `add_tag` for the collision contract.
    pub fn add_event_tag(&mut self, event_tag: EventTag) -> Result<(), ModelError> {
        if self.has_event_tag(&event_tag) {
            return Err(ModelError::DuplicateEventTag(event_tag.name().to_string()));
        }
        self.event_tags.push(event_tag);
        Ok(())
    }

    /// Appends a person. See `add_tag` for the collision contract.
    ///
    /// # Errors
    /// - `DuplicatePerson` when a person with the same name exists.
    /// - `UnknownTag` / `UnknownEventTag` when a reference is not in the book.
    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson(person.name().to_string()));
        }
        self.check_references(&person)?;
        self.persons.push(person);
        Ok(())
    }

    /// Adds every tag and event-tag `person` references that the book lacks.
    ///
    /// Missing event-tags are added without a time window.
    pub fn add_missing_references(&mut self, person: &Person) -> Result<(), ModelError> {
        for tag in person.tags() {
            if !self.has_tag(tag) {
                self.add_tag(tag.clone())?;
            }
        }
        for name in person.event_tags() {
            if !self.has_event_tag_named(name) {
                let event_tag = EventTag::new(name.as_str())
                    .map_err(|_| ModelError::UnknownEventTag(name.clone()))?;
                self.add_event_tag(event_tag)?;
            }
        }
        Ok(())
    }

    fn check_references(&self, person: &Person) -> Result<(), ModelError> {
        if let Some(tag) = person.tags().iter().find(|tag| !self.has_tag(tag)) {
            return Err(ModelError::UnknownTag(tag.name().to_string()));
        }
        if let Some(name) = person
            .event_tags()
            .iter()
            .find(|name| !self.has_event_tag_named(name))
        {
            return Err(ModelError::UnknownEventTag(name.clone()));
        }
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// # Errors
    /// - `PersonNotFound` when `target` is not in the book.
    /// - `DuplicatePerson` when `edited` collides with a different person.
    /// - `UnknownTag` / `UnknownEventTag` when `edited` references are not in the book.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let index = self
            .persons
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name().to_string()))?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(ModelError::DuplicatePerson(edited.name().to_string()));
        }
        self.check_references(&edited)?;
        self.persons[index] = edited;
        Ok(())
    }

    /// Removes a person equal to `target`.
    pub fn remove_person(&mut self, target: &Person) -> Result<(), ModelError> {
        let index = self
            .persons
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name().to_string()))?;
        self.persons.remove(index);
        Ok(())
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn event_tag_count(&self) -> usize {
        self.event_tags.len()
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.event_tags.is_empty() && self.persons.is_empty()
    }
}

impl ReadOnlyAddressBook for AddressBook {
    fn tag_list(&self) -> &[Tag] {
        &self.tags
    }

    fn event_tag_list(&self) -> &[EventTag] {
        &self.event_tags
    }

    fn person_list(&self) -> &[Person] {
        &self.persons
    }
}
