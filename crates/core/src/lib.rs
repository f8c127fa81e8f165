//! mxcraft-core - Compose MultiversX smart contracts from reusable capability
//! modules and publish them through a step-sequenced deployment pipeline.
//!
//! Two engines carry the state and sequencing logic: the module composition
//! assembler ([`Selection::compose`]) and the deployment orchestrator
//! ([`DeploymentOrchestrator`]), a four-stage state machine over injected
//! wallet, compiler, submitter and verifier collaborators.

mod assembler;
mod error;
mod network;
mod orchestrator;
mod registry;
mod session;
pub mod services;
mod traits;

pub use assembler::{AssembledContract, Selection};
pub use error::Error;
pub use network::{Network, NetworkProfile};
pub use orchestrator::DeploymentOrchestrator;
pub use registry::{ComponentRegistry, ContractModule};
pub use session::{
    DEPLOYMENT_STEPS, DeploymentResult, DeploymentSession, DeploymentStep, OverallStatus, StepId,
    StepStatus,
};
pub use traits::{
    ArtifactCompiler, CompiledArtifact, PromptCompletionService, SubmitReceipt, Submitter,
    Verifier, WalletSession,
};
