//! Session store.
//!
//! Holds the single active [`Identity`] for the lifetime of a session.
//! Read-mostly; written only on login and logout. One `RwLock` keeps reads
//! consistent after a save or teardown and makes teardown atomic.

use std::sync::RwLock;

use campus_core::{Role, UserId};

use crate::Identity;

/// Store for the authenticated identity.
///
/// Accessors never fail: when no identity is present (or the token is empty)
/// they return `None` / an empty string, so callers can branch without
/// handling errors.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the identity from a successful login, overwriting any prior one.
    pub fn save_identity(&self, identity: Identity) {
        let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(identity);
    }

    /// Clear all stored fields. Idempotent.
    pub fn destroy(&self) {
        let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Snapshot of the current identity, for threading into policy calls.
    pub fn snapshot(&self) -> Option<Identity> {
        self.read(|identity| identity.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.read(|identity| identity.role)
    }

    pub fn id(&self) -> Option<UserId> {
        self.read(|identity| identity.id)
    }

    pub fn display_name(&self) -> String {
        self.read(|identity| identity.display_name.clone())
            .unwrap_or_default()
    }

    pub fn token(&self) -> String {
        self.read(|identity| identity.token.clone())
            .unwrap_or_default()
    }

    /// True when an identity with a non-empty token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.read(Identity::is_authenticated).unwrap_or(false)
    }

    fn read<T>(&self, f: impl FnOnce(&Identity) -> T) -> Option<T> {
        let slot = self.current.read().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().map(f)
    }
}
