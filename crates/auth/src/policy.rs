//! Authorization policy.
//!
//! One stateless decision table consulted by every orchestrator, replacing
//! the per-screen checks of the previous client (which had drifted apart
//! between screens). All functions here are pure: no IO, no panics, no
//! session access — the actor is passed in explicitly.

use thiserror::Error;
use tracing::debug;

use campus_core::{Role, UserId};

use crate::Identity;

/// Entity types the policy rules over.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Administrator,
    Teacher,
    Student,
    Event,
}

impl EntityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Administrator => "administrator",
            EntityKind::Teacher => "teacher",
            EntityKind::Student => "student",
            EntityKind::Event => "event",
        }
    }
}

/// Actions the policy rules over.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    View,
    Edit,
    Delete,
}

impl Action {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::View => "view",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

/// Denial reasons.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// No token; the caller should redirect to the login screen.
    #[error("not authenticated")]
    Unauthenticated,

    /// The actor's role (or ownership) does not permit the action.
    #[error("forbidden: {role} may not {action} {entity}")]
    Forbidden {
        role: Role,
        action: &'static str,
        entity: &'static str,
    },

    /// Self-deletion of the last remaining administrator account.
    #[error("cannot delete the only administrator account")]
    SoleAdministrator,
}

/// Decide whether `actor` may perform `action` on an entity of `entity` kind.
///
/// `target_owner` is the user id a profile record belongs to (`None` when
/// ownership is irrelevant, e.g. events or list views). `admin_count` is the
/// current number of administrator accounts; it only matters for the
/// sole-administrator guard and may be anything otherwise.
pub fn authorize(
    actor: &Identity,
    entity: EntityKind,
    action: Action,
    target_owner: Option<UserId>,
    admin_count: usize,
) -> Result<(), AuthzError> {
    let decision = decide(actor, entity, action, target_owner, admin_count);
    if let Err(denial) = &decision {
        debug!(
            actor_id = actor.id.as_i64(),
            role = actor.role.as_str(),
            entity = entity.as_str(),
            action = action.as_str(),
            %denial,
            "authorization denied"
        );
    }
    decision
}

/// Boolean form of [`authorize`], used by screens to decide whether to show
/// an edit/delete affordance at all.
pub fn allows(
    actor: &Identity,
    entity: EntityKind,
    action: Action,
    target_owner: Option<UserId>,
    admin_count: usize,
) -> bool {
    decide(actor, entity, action, target_owner, admin_count).is_ok()
}

fn decide(
    actor: &Identity,
    entity: EntityKind,
    action: Action,
    target_owner: Option<UserId>,
    admin_count: usize,
) -> Result<(), AuthzError> {
    if !actor.is_authenticated() {
        return Err(AuthzError::Unauthenticated);
    }

    let forbidden = || {
        Err(AuthzError::Forbidden {
            role: actor.role,
            action: action.as_str(),
            entity: entity.as_str(),
        })
    };

    match (entity, action) {
        // Any authenticated actor may create events and view the list (the
        // list is additionally audience-filtered downstream).
        (EntityKind::Event, Action::Create | Action::View) => Ok(()),

        // Mutating an existing event is reserved to administrators,
        // regardless of who registered it.
        (EntityKind::Event, Action::Edit | Action::Delete) => match actor.role {
            Role::Administrator => Ok(()),
            _ => forbidden(),
        },

        // Registration is open; list views only require authentication.
        (_, Action::Create | Action::View) => Ok(()),

        (EntityKind::Administrator, Action::Edit) => match actor.role {
            Role::Administrator => Ok(()),
            _ => forbidden(),
        },

        (EntityKind::Administrator, Action::Delete) => {
            if actor.role != Role::Administrator {
                return forbidden();
            }
            // Deleting one's own record is fine while other administrators
            // remain; the last one must not remove itself.
            if target_owner == Some(actor.id) && admin_count == 1 {
                return Err(AuthzError::SoleAdministrator);
            }
            Ok(())
        }

        (EntityKind::Teacher, Action::Edit | Action::Delete) => match actor.role {
            Role::Administrator => Ok(()),
            Role::Teacher if target_owner == Some(actor.id) => Ok(()),
            _ => forbidden(),
        },

        // Students have no edit/delete rights on student records, their own
        // included.
        (EntityKind::Student, Action::Edit | Action::Delete) => match actor.role {
            Role::Administrator | Role::Teacher => Ok(()),
            Role::Student => forbidden(),
        },
    }
}
