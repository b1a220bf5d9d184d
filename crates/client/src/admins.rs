//! Administrator directory orchestration.
//!
//! Deletion is the delicate flow here: the sole-administrator guard must
//! fire before the confirmation dialog even opens, and a confirmed
//! self-deletion ends with local session teardown once the backend has
//! confirmed.

use tracing::{info, warn};

use campus_auth::{Action, EntityKind, SessionStore, allows, authorize};
use campus_core::{Role, UserId};

use crate::confirm::{ConfirmDialog, DeleteOutcome};
use crate::gateway::{ApiGateway, UserSummary};
use crate::{ClientError, require_identity};

pub struct AdminDirectory<'a, G> {
    gateway: &'a G,
    session: &'a SessionStore,
}

impl<'a, G: ApiGateway> AdminDirectory<'a, G> {
    pub fn new(gateway: &'a G, session: &'a SessionStore) -> Self {
        Self { gateway, session }
    }

    pub async fn list(&self) -> Result<Vec<UserSummary>, ClientError> {
        let actor = require_identity(self.session)?;
        self.gateway.list_admins(&actor.token).await
    }

    /// Gate for navigating to the edit form.
    pub fn authorize_edit(&self, target: UserId) -> Result<(), ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Administrator, Action::Edit, Some(target), 0)?;
        Ok(())
    }

    /// Whether to render edit/delete affordances for `target` at all.
    pub fn can_manage(&self, target: UserId, roster: &[UserSummary]) -> bool {
        match self.session.snapshot() {
            Some(actor) => allows(
                &actor,
                EntityKind::Administrator,
                Action::Delete,
                Some(target),
                roster.len(),
            ),
            None => false,
        }
    }

    /// Delete an administrator record.
    ///
    /// `roster` is the most recently fetched admin list; target and count are
    /// read from the same snapshot so the sole-administrator guard and the
    /// deletion agree on the state of the world. On confirmed self-deletion
    /// the backend session is closed and the local one destroyed; the caller
    /// gets [`DeleteOutcome::DeletedSelf`] and should redirect to login.
    pub async fn delete(
        &self,
        target: UserId,
        roster: &[UserSummary],
        dialog: &dyn ConfirmDialog,
    ) -> Result<DeleteOutcome, ClientError> {
        let actor = require_identity(self.session)?;
        authorize(
            &actor,
            EntityKind::Administrator,
            Action::Delete,
            Some(target),
            roster.len(),
        )?;

        if !dialog.confirm("¿Eliminar este administrador?").confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.gateway
            .delete_user(Role::Administrator, target, &actor.token)
            .await?;

        if target == actor.id {
            info!(user_id = actor.id.as_i64(), "own administrator account deleted, ending session");
            if let Err(err) = self.gateway.logout(&actor.token).await {
                warn!(%err, "backend logout failed after self-deletion, destroying local session anyway");
            }
            self.session.destroy();
            return Ok(DeleteOutcome::DeletedSelf);
        }
        Ok(DeleteOutcome::Deleted)
    }
}
