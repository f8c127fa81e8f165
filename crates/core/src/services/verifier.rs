//! Contract verification strategies.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::NetworkProfile;
use crate::traits::Verifier;

/// Length of a bech32-style address: the `erd1` tag plus 59 data characters.
const ADDRESS_LEN: usize = 63;

/// Timeout for account lookups.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Development verifier: checks the address shape without a network call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevVerifier;

impl Verifier for DevVerifier {
    async fn verify(&self, contract_address: &str, _network: &NetworkProfile) -> Result<()> {
        if !contract_address.starts_with("erd1") || contract_address.len() != ADDRESS_LEN {
            anyhow::bail!("malformed contract address: {contract_address}");
        }
        Ok(())
    }
}

/// Verifier that checks the deployed account exists on the network API.
pub struct ApiVerifier {
    client: reqwest::Client,
}

impl ApiVerifier {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl Verifier for ApiVerifier {
    async fn verify(&self, contract_address: &str, network: &NetworkProfile) -> Result<()> {
        let url = format!("{}/accounts/{}", network.api_url, contract_address);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to query {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "account {} not found on {} (HTTP {})",
                contract_address,
                network.display_name,
                response.status()
            );
        }

        tracing::info!(
            address = %contract_address,
            network = %network.key,
            "Contract account verified"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Network;

    #[tokio::test]
    async fn test_dev_verifier_accepts_wellformed_address() {
        let address = format!("erd1{}", "0".repeat(59));
        assert!(
            DevVerifier
                .verify(&address, Network::Devnet.profile())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_dev_verifier_rejects_malformed_addresses() {
        let network = Network::Devnet.profile();
        assert!(DevVerifier.verify("", network).await.is_err());
        assert!(DevVerifier.verify("0x1234", network).await.is_err());
        assert!(DevVerifier.verify("erd1tooshort", network).await.is_err());
    }
}
