//! `campus-auth` — session state and the authorization policy.
//!
//! This crate is intentionally decoupled from HTTP and storage: the policy is
//! pure functions over an explicit [`Identity`], and the session store is the
//! only stateful piece.

pub mod identity;
pub mod policy;
pub mod session;

pub use identity::Identity;
pub use policy::{Action, AuthzError, EntityKind, allows, authorize};
pub use session::SessionStore;
