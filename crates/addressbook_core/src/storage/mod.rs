//! JSON storage layer for the address book.
//!
//! # Responsibility
//! - Define the serializable document and its per-entity records.
//! - Convert between documents and the in-memory model.
//!
//! # Invariants
//! - Storage types never perform file I/O; callers hand in and persist
//!   JSON text or `serde_json` values.
//! - Every record is validated by its adapter before it reaches the model.

pub mod adapter;
pub mod document;
pub mod error;
pub mod records;
