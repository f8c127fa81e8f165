//! Collaborator seams for the deployment pipeline.
//!
//! Each deployment step delegates its work to one injected collaborator.
//! The orchestrator owns the sequencing and the session state; collaborators
//! own the side effects (wallet connection, compilation, submission,
//! verification) and the separate AI-assisted authoring path.

mod compiler;
mod generator;
mod submitter;
mod verifier;
mod wallet;

pub use compiler::{ArtifactCompiler, CompiledArtifact};
pub use generator::PromptCompletionService;
pub use submitter::{SubmitReceipt, Submitter};
pub use verifier::Verifier;
pub use wallet::WalletSession;
