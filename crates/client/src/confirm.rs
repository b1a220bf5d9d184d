//! Deletion confirmation contract.
//!
//! The previous client had two shapes for the same modal (a bare boolean in
//! one screen, `{isDelete: boolean}` in another); this is the single contract
//! both now use. Orchestrators consult the dialog themselves, strictly before
//! issuing the delete request.

/// Outcome of a confirmation dialog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub confirmed: bool,
}

impl Confirmation {
    pub const YES: Confirmation = Confirmation { confirmed: true };
    pub const NO: Confirmation = Confirmation { confirmed: false };
}

/// A modal asking the user to confirm a deletion.
///
/// Synchronous on purpose: the orchestrator must observe the answer before
/// anything else happens.
pub trait ConfirmDialog {
    fn confirm(&self, prompt: &str) -> Confirmation;
}

/// A dialog with a fixed answer (tests, non-interactive callers).
#[derive(Debug, Copy, Clone)]
pub struct AlwaysAnswer(pub bool);

impl ConfirmDialog for AlwaysAnswer {
    fn confirm(&self, _prompt: &str) -> Confirmation {
        Confirmation { confirmed: self.0 }
    }
}

/// What a delete flow ended up doing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The record was deleted.
    Deleted,
    /// The actor deleted their own account; the session has been torn down
    /// and the caller should redirect to the unauthenticated entry point.
    DeletedSelf,
}
