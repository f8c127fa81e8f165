//! Deployment transaction submission seam.

use std::future::Future;

use anyhow::Result;
use serde::Serialize;

use crate::NetworkProfile;

use super::CompiledArtifact;

/// Receipt for a submitted deployment transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    /// Address the contract was deployed at.
    pub contract_address: String,
    /// Hash of the deployment transaction.
    pub tx_hash: String,
}

/// Submits a compiled contract to the network.
pub trait Submitter: Send + Sync {
    /// Send the deployment transaction from `sender` and return its receipt.
    fn submit(
        &self,
        artifact: &CompiledArtifact,
        sender: &str,
        network: &NetworkProfile,
    ) -> impl Future<Output = Result<SubmitReceipt>> + Send;
}
