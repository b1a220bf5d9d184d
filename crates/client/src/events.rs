//! Event CRUD orchestration.
//!
//! Listing is public (no token required) and always passes through the
//! audience filter for the current role. Mutations are gated by the policy
//! and validated locally before anything is sent.

use campus_auth::{Action, EntityKind, SessionStore, authorize};
use campus_core::EventId;
use campus_events::{EventRecord, validate, visible_events};

use crate::confirm::{ConfirmDialog, DeleteOutcome};
use crate::gateway::{ApiGateway, UserSummary};
use crate::{ClientError, require_identity};

pub struct EventDesk<'a, G> {
    gateway: &'a G,
    session: &'a SessionStore,
}

impl<'a, G: ApiGateway> EventDesk<'a, G> {
    pub fn new(gateway: &'a G, session: &'a SessionStore) -> Self {
        Self { gateway, session }
    }

    /// Fetch the event list, filtered to what the current role may see.
    ///
    /// Works without a session: the unauthenticated view gets the list the
    /// backend serves publicly, unfiltered (no role to filter by).
    pub async fn list(&self) -> Result<Vec<EventRecord>, ClientError> {
        let token = self.session.token();
        let token = (!token.is_empty()).then_some(token);
        let events = self.gateway.list_events(token.as_deref()).await?;
        Ok(visible_events(self.session.role(), events))
    }

    pub async fn get(&self, id: EventId) -> Result<EventRecord, ClientError> {
        let token = self.session.token();
        let token = (!token.is_empty()).then_some(token);
        self.gateway.get_event(id, token.as_deref()).await
    }

    /// Validate and submit a new event. Any authenticated actor may create.
    pub async fn create(&self, event: &EventRecord) -> Result<EventRecord, ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Event, Action::Create, None, 0)?;

        let errors = validate(event, false);
        if !errors.is_empty() {
            return Err(ClientError::Validation(errors));
        }
        self.gateway.create_event(event, &actor.token).await
    }

    /// Validate and submit an update. Administrators only, regardless of who
    /// registered the event.
    pub async fn update(&self, event: &EventRecord) -> Result<EventRecord, ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Event, Action::Edit, None, 0)?;

        let errors = validate(event, true);
        if !errors.is_empty() {
            return Err(ClientError::Validation(errors));
        }
        self.gateway.update_event(event, &actor.token).await
    }

    /// Confirm and delete an event. Administrators only; the confirmation is
    /// observed strictly before the delete request goes out.
    pub async fn delete(
        &self,
        id: EventId,
        name: &str,
        dialog: &dyn ConfirmDialog,
    ) -> Result<DeleteOutcome, ClientError> {
        let actor = require_identity(self.session)?;
        authorize(&actor, EntityKind::Event, Action::Delete, None, 0)?;

        let prompt = format!("¿Eliminar el evento \"{name}\"?");
        if !dialog.confirm(&prompt).confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.gateway.delete_event(id, &actor.token).await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Candidates for the responsible-party selector: teachers and
    /// administrators, combined client-side. Students cannot be responsible
    /// for an event.
    pub async fn event_managers(&self) -> Result<Vec<UserSummary>, ClientError> {
        let actor = require_identity(self.session)?;
        let mut managers = self.gateway.list_teachers(&actor.token).await?;
        managers.extend(self.gateway.list_admins(&actor.token).await?);
        Ok(managers)
    }
}
