//! Post-deployment verification seam.

use std::future::Future;

use anyhow::Result;

use crate::NetworkProfile;

/// Verifies a freshly deployed contract on the network.
pub trait Verifier: Send + Sync {
    fn verify(
        &self,
        contract_address: &str,
        network: &NetworkProfile,
    ) -> impl Future<Output = Result<()>> + Send;
}
