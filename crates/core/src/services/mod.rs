//! Built-in collaborator implementations.
//!
//! The `Dev*` collaborators simulate their side effects so a full pipeline
//! can run without a wallet provider or a funded account; [`SandboxCompiler`]
//! and [`ApiVerifier`] perform the real thing.

mod compiler;
mod generator;
mod submitter;
mod verifier;
mod wallet;

pub use compiler::{DevCompiler, SandboxCompiler};
pub use generator::{OpenAiGenerator, unfence};
pub use submitter::DevSubmitter;
pub use verifier::{ApiVerifier, DevVerifier};
pub use wallet::DevWallet;

use rand::Rng;

use crate::DeploymentOrchestrator;

/// Orchestrator wired with the fully simulated collaborator stack.
pub fn dev_stack() -> DeploymentOrchestrator<DevWallet, DevCompiler, DevSubmitter, DevVerifier> {
    DeploymentOrchestrator::new(DevWallet, DevCompiler, DevSubmitter, DevVerifier)
}

/// Length of the data part of a bech32-style address after the `erd1` tag.
const ADDRESS_BODY_LEN: usize = 59;

/// Generate a bech32-style account address for the simulated collaborators.
pub(crate) fn random_address() -> String {
    format!("erd1{}", random_hex(ADDRESS_BODY_LEN))
}

pub(crate) fn random_hex(len: usize) -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    let mut rng = rand::rng();
    (0..len)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_address_shape() {
        let address = random_address();
        assert!(address.starts_with("erd1"));
        assert_eq!(address.len(), 63);
    }

    #[test]
    fn test_random_hex_alphabet() {
        let hash = random_hex(64);
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
