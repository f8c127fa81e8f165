//! Wallet connection seam.

use std::future::Future;

use anyhow::Result;

use crate::NetworkProfile;

/// A wallet that can be connected for a given network.
///
/// Replaces any ambient, loosely-typed wallet global: the orchestrator only
/// ever talks to the injected instance.
pub trait WalletSession: Send + Sync {
    /// Connect the wallet and return the bech32 address of the account that
    /// will fund the deployment.
    fn connect(&self, network: &NetworkProfile) -> impl Future<Output = Result<String>> + Send;
}
