//! Student directory orchestration.
//!
//! Administrators and teachers manage any student record; students manage
//! none, their own included.

use campus_auth::{Action, EntityKind, SessionStore, allows, authorize};
use campus_core::{Role, UserId};

use crate::confirm::{ConfirmDialog, DeleteOutcome};
use crate::gateway::{ApiGateway, UserSummary};
use crate::{ClientError, require_identity};

pub struct StudentDirectory<'a, G> {
    gateway: &'a G,
    session: &'a SessionStore,
}

impl<'a, G: ApiGateway> StudentDirectory<'a, G> {
    pub fn new(gateway: &'a G, session: &'a SessionStore) -> Self {
        Self { gateway, session }
    }

    pub async fn list(&self) -> Result<Vec<UserSummary>, ClientError> {
        let actor = require_identity(self.session)?;
        self.gateway.list_students(&actor.token).await
    }

    /// Gate for navigating to the edit form.
    pub fn authorize_edit(&self, target: UserId) -> Result<(), ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Student, Action::Edit, Some(target), 0)?;
        Ok(())
    }

    /// Whether to render edit/delete affordances for `target`.
    pub fn can_manage(&self, target: UserId) -> bool {
        match self.session.snapshot() {
            Some(actor) => allows(&actor, EntityKind::Student, Action::Delete, Some(target), 0),
            None => false,
        }
    }

    pub async fn delete(
        &self,
        target: UserId,
        dialog: &dyn ConfirmDialog,
    ) -> Result<DeleteOutcome, ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Student, Action::Delete, Some(target), 0)?;

        if !dialog.confirm("¿Eliminar este alumno?").confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.gateway
            .delete_user(Role::Student, target, &actor.token)
            .await?;
        Ok(DeleteOutcome::Deleted)
    }
}
