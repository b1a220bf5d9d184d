//! Teacher directory orchestration.
//!
//! Administrators manage any teacher record; a teacher manages only their
//! own; students have no rights here.

use campus_auth::{Action, EntityKind, SessionStore, allows, authorize};
use campus_core::{Role, UserId};

use crate::confirm::{ConfirmDialog, DeleteOutcome};
use crate::gateway::{ApiGateway, UserSummary};
use crate::{ClientError, require_identity};

pub struct TeacherDirectory<'a, G> {
    gateway: &'a G,
    session: &'a SessionStore,
}

impl<'a, G: ApiGateway> TeacherDirectory<'a, G> {
    pub fn new(gateway: &'a G, session: &'a SessionStore) -> Self {
        Self { gateway, session }
    }

    pub async fn list(&self) -> Result<Vec<UserSummary>, ClientError> {
        let actor = require_identity(self.session)?;
        self.gateway.list_teachers(&actor.token).await
    }

    /// Gate for navigating to the edit form.
    pub fn authorize_edit(&self, target: UserId) -> Result<(), ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Teacher, Action::Edit, Some(target), 0)?;
        Ok(())
    }

    /// Whether to render edit/delete affordances for `target`.
    pub fn can_manage(&self, target: UserId) -> bool {
        match self.session.snapshot() {
            Some(actor) => allows(&actor, EntityKind::Teacher, Action::Delete, Some(target), 0),
            None => false,
        }
    }

    pub async fn delete(
        &self,
        target: UserId,
        dialog: &dyn ConfirmDialog,
    ) -> Result<DeleteOutcome, ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Teacher, Action::Delete, Some(target), 0)?;

        if !dialog.confirm("¿Eliminar este maestro?").confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.gateway
            .delete_user(Role::Teacher, target, &actor.token)
            .await?;
        Ok(DeleteOutcome::Deleted)
    }
}
