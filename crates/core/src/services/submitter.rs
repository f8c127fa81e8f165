//! Simulated deployment transaction submission.

use anyhow::Result;

use crate::NetworkProfile;
use crate::traits::{CompiledArtifact, SubmitReceipt, Submitter};

use super::{random_address, random_hex};

/// Length of a transaction hash in hex characters.
const TX_HASH_LEN: usize = 64;

/// Development submitter: fabricates the deployment transaction instead of
/// signing and broadcasting one. Real submission requires wallet-held keys
/// and is injected by the embedding application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevSubmitter;

impl Submitter for DevSubmitter {
    async fn submit(
        &self,
        artifact: &CompiledArtifact,
        sender: &str,
        network: &NetworkProfile,
    ) -> Result<SubmitReceipt> {
        let receipt = SubmitReceipt {
            contract_address: random_address(),
            tx_hash: random_hex(TX_HASH_LEN),
        };
        tracing::info!(
            sender = %sender,
            chain_id = %network.chain_id,
            sha256 = %artifact.sha256,
            contract = %receipt.contract_address,
            tx_hash = %receipt.tx_hash,
            "Submitted deployment transaction"
        );
        Ok(receipt)
    }
}
