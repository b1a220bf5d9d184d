//! `campus-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by every other crate: integer-backed
//! identifiers, the role enum, the domain error model, and the field-keyed
//! validation error collection.

pub mod error;
pub mod field_errors;
pub mod id;
pub mod role;

pub use error::DomainError;
pub use field_errors::FieldErrors;
pub use id::{EventId, UserId};
pub use role::Role;
