//! Error taxonomy for contract assembly and deployment.

use serde::Serialize;

use crate::session::StepId;

/// All failures the core can surface to a caller.
///
/// Validation variants (`EmptySource`, `UnknownNetwork`, `Busy`) are rejected
/// before a deployment session exists. The per-step variants carry the
/// message of the collaborator failure that ended the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum Error {
    #[error("contract source is empty")]
    EmptySource,
    #[error("unknown network `{0}`")]
    UnknownNetwork(String),
    #[error("unknown module `{0}`")]
    UnknownModule(String),
    #[error("index {index} out of range for selection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a deployment is already in progress")]
    Busy,
    #[error("wallet connection failed: {0}")]
    Connection(String),
    #[error("compilation failed: {0}")]
    Compile(String),
    #[error("deployment failed: {0}")]
    Submit(String),
    #[error("verification failed: {0}")]
    Verify(String),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl Error {
    /// Map a collaborator failure to the variant of the step it aborted.
    ///
    /// A collaborator that already returned a typed [`Error`] keeps it;
    /// anything else is wrapped with the failing step's variant, preserving
    /// the full context chain of the original error.
    pub(crate) fn for_step(step: StepId, err: anyhow::Error) -> Self {
        if let Some(typed) = err.downcast_ref::<Error>() {
            return typed.clone();
        }
        let message = format!("{err:#}");
        match step {
            StepId::Connect => Error::Connection(message),
            StepId::Compile => Error::Compile(message),
            StepId::Deploy => Error::Submit(message),
            StepId::Verify => Error::Verify(message),
        }
    }
}
