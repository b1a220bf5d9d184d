//! Backend collaborator contract.
//!
//! The orchestrators are generic over this trait so tests can substitute a
//! stub gateway; [`crate::HttpGateway`] is the production implementation.

use serde::{Deserialize, Serialize};

use campus_auth::Identity;
use campus_core::{EventId, Role, UserId};
use campus_events::EventRecord;

use crate::ClientError;

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: UserId,
    #[serde(rename = "rol")]
    pub role: Role,
    #[serde(rename = "nombre")]
    pub display_name: String,
    pub token: String,
}

impl From<LoginResponse> for Identity {
    fn from(response: LoginResponse) -> Self {
        Identity::new(response.id, response.display_name, response.role, response.token)
    }
}

/// One row of a user directory listing. The backend nests the account under
/// `user`; this is the flattened shape the screens work with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Async contract with the REST backend.
///
/// Tokens are passed explicitly per call rather than held by the gateway, so
/// a single gateway serves whatever identity the session currently holds.
/// Event listing takes an optional token: the public (unauthenticated) view
/// is allowed to read the list.
#[allow(async_fn_in_trait)]
pub trait ApiGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError>;
    async fn logout(&self, token: &str) -> Result<(), ClientError>;

    async fn list_events(&self, token: Option<&str>) -> Result<Vec<EventRecord>, ClientError>;
    async fn get_event(&self, id: EventId, token: Option<&str>) -> Result<EventRecord, ClientError>;
    async fn create_event(&self, event: &EventRecord, token: &str) -> Result<EventRecord, ClientError>;
    async fn update_event(&self, event: &EventRecord, token: &str) -> Result<EventRecord, ClientError>;
    async fn delete_event(&self, id: EventId, token: &str) -> Result<(), ClientError>;

    async fn list_admins(&self, token: &str) -> Result<Vec<UserSummary>, ClientError>;
    async fn list_teachers(&self, token: &str) -> Result<Vec<UserSummary>, ClientError>;
    async fn list_students(&self, token: &str) -> Result<Vec<UserSummary>, ClientError>;

    /// Delete the profile record owned by `id`, through the role-specific
    /// endpoint for `role`.
    async fn delete_user(&self, role: Role, id: UserId, token: &str) -> Result<(), ClientError>;
}
