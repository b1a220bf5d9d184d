//! `campus-client` — backend gateway and CRUD orchestrators.
//!
//! Every user-triggered operation flows through an orchestrator here: the
//! orchestrator consults the authorization policy with the session identity,
//! denies locally when the policy says no (the backend is never asked to
//! reject what the client already knows is forbidden), and otherwise calls
//! the gateway and interprets the outcome.

pub mod account;
pub mod admins;
pub mod confirm;
pub mod error;
pub mod events;
pub mod gateway;
pub mod http;
pub mod students;
pub mod teachers;

#[cfg(test)]
pub(crate) mod testing;

pub use account::AccountFlow;
pub use admins::AdminDirectory;
pub use confirm::{ConfirmDialog, Confirmation, DeleteOutcome};
pub use error::ClientError;
pub use events::EventDesk;
pub use gateway::{ApiGateway, LoginResponse, UserSummary};
pub use http::HttpGateway;
pub use students::StudentDirectory;
pub use teachers::TeacherDirectory;

use campus_auth::{Identity, SessionStore};

/// Current identity, or `SessionExpired` when there is no usable token.
///
/// The caller is expected to react to `SessionExpired` by redirecting to the
/// unauthenticated entry point instead of issuing the gated request.
pub(crate) fn require_identity(session: &SessionStore) -> Result<Identity, ClientError> {
    session
        .snapshot()
        .filter(Identity::is_authenticated)
        .ok_or(ClientError::SessionExpired)
}
