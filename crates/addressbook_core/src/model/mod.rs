//! In-memory address-book model.
//!
//! # Responsibility
//! - Define validated value types for persons, tags and event-tags.
//! - Provide the `AddressBook` aggregate with membership predicates.
//!
//! # Invariants
//! - Every value reachable from an `AddressBook` has passed field validation.
//! - The aggregate never holds two entities with the same identity.

pub mod address_book;
pub mod person;
pub mod tag;
pub mod validation;
