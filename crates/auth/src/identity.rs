//! Authenticated identity value object.

use serde::{Deserialize, Serialize};

use campus_core::{Role, UserId};

/// Identity of the authenticated actor for the current session.
///
/// Created from a successful login response, held only by the session store,
/// and threaded explicitly into every policy and orchestrator call so tests
/// can substitute arbitrary identities without shared state.
///
/// # Invariants
/// - At most one identity is active per session (enforced by the store).
/// - An empty `token` means the actor is unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub display_name: String,
    pub role: Role,
    pub token: String,
}

impl Identity {
    pub fn new(id: UserId, display_name: impl Into<String>, role: Role, token: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role,
            token: token.into(),
        }
    }

    /// An identity without a token is treated as unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
