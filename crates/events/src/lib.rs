//! `campus-events` — academic event model, audience handling and validation.
//!
//! Three concerns live here: the wire model of an academic event (including
//! the backend's JSON-string-encoded audience field), the role-based audience
//! filter applied before display, and the form validator.

pub mod audience;
pub mod record;
pub mod validate;

pub use audience::{Audience, normalize_audience, visible_events};
pub use record::EventRecord;
pub use validate::{EDUCATION_PROGRAMS, EVENT_TYPES, validate};
