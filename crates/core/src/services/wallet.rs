//! Simulated wallet connection.

use anyhow::Result;

use crate::NetworkProfile;
use crate::traits::WalletSession;

use super::random_address;

/// Development wallet: yields a funded-looking account address without
/// contacting a wallet provider. Real connect flows require user
/// interaction and are injected by the embedding application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevWallet;

impl WalletSession for DevWallet {
    async fn connect(&self, network: &NetworkProfile) -> Result<String> {
        let address = random_address();
        tracing::info!(
            network = %network.key,
            address = %address,
            "Connected development wallet"
        );
        Ok(address)
    }
}
