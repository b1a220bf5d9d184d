//! Login/logout orchestration.

use tracing::{info, warn};

use campus_auth::{Identity, SessionStore};
use campus_core::{FieldErrors, Role};

use crate::gateway::ApiGateway;
use crate::{ClientError, require_identity};

/// Check the login form before asking the backend.
pub fn validate_credentials(username: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if username.trim().is_empty() {
        errors.insert("username", "El correo electrónico es obligatorio");
    } else if !username.contains('@') {
        errors.insert("username", "El correo electrónico no es válido");
    }
    if password.is_empty() {
        errors.insert("password", "La contraseña es obligatoria");
    }
    errors
}

/// Route the host should land on after login, by role.
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Administrator => "/admin",
        Role::Teacher => "/maestros",
        Role::Student => "/alumnos",
    }
}

/// Orchestrates authentication against the session store.
pub struct AccountFlow<'a, G> {
    gateway: &'a G,
    session: &'a SessionStore,
}

impl<'a, G: ApiGateway> AccountFlow<'a, G> {
    pub fn new(gateway: &'a G, session: &'a SessionStore) -> Self {
        Self { gateway, session }
    }

    /// Validate credentials, authenticate, and store the resulting identity.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, ClientError> {
        let errors = validate_credentials(username, password);
        if !errors.is_empty() {
            return Err(ClientError::Validation(errors));
        }

        let response = self.gateway.login(username, password).await?;
        let identity = Identity::from(response);
        info!(user_id = identity.id.as_i64(), role = identity.role.as_str(), "login");
        self.session.save_identity(identity.clone());
        Ok(identity)
    }

    /// Invalidate the backend session and tear down the local one.
    ///
    /// Local teardown happens even when the backend call fails: a session the
    /// backend would not close must still end locally.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = match require_identity(self.session) {
            Ok(identity) => self.gateway.logout(&identity.token).await,
            Err(_) => Ok(()),
        };
        if let Err(err) = &result {
            warn!(%err, "backend logout failed, destroying local session anyway");
        }
        self.session.destroy();
        Ok(())
    }
}
