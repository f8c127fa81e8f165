//! Supported deployment networks and their endpoint profiles.

use serde::{Deserialize, Serialize};

use crate::Error;

/// A deployment target network.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    Devnet,
    Testnet,
    Mainnet,
}

/// The fixed endpoint bundle for one network.
///
/// Profiles are baked in at compile time; there is exactly one per
/// [`Network`] and they are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    pub key: Network,
    pub display_name: &'static str,
    pub api_url: &'static str,
    pub gateway_url: &'static str,
    pub explorer_url: &'static str,
    /// Chain identifier embedded in transactions ("D", "T" or "1").
    pub chain_id: &'static str,
}

const DEVNET: NetworkProfile = NetworkProfile {
    key: Network::Devnet,
    display_name: "MultiversX Devnet",
    api_url: "https://devnet-api.multiversx.com",
    gateway_url: "https://devnet-gateway.multiversx.com",
    explorer_url: "https://devnet-explorer.multiversx.com",
    chain_id: "D",
};

const TESTNET: NetworkProfile = NetworkProfile {
    key: Network::Testnet,
    display_name: "MultiversX Testnet",
    api_url: "https://testnet-api.multiversx.com",
    gateway_url: "https://testnet-gateway.multiversx.com",
    explorer_url: "https://testnet-explorer.multiversx.com",
    chain_id: "T",
};

const MAINNET: NetworkProfile = NetworkProfile {
    key: Network::Mainnet,
    display_name: "MultiversX Mainnet",
    api_url: "https://api.multiversx.com",
    gateway_url: "https://gateway.multiversx.com",
    explorer_url: "https://explorer.multiversx.com",
    chain_id: "1",
};

impl Network {
    /// The endpoint profile for this network.
    pub fn profile(&self) -> &'static NetworkProfile {
        match self {
            Network::Devnet => &DEVNET,
            Network::Testnet => &TESTNET,
            Network::Mainnet => &MAINNET,
        }
    }

    /// Resolve a network key (`devnet`, `testnet`, `mainnet`) to its profile.
    pub fn resolve(key: &str) -> Result<&'static NetworkProfile, Error> {
        let network: Network = key
            .parse()
            .map_err(|_| Error::UnknownNetwork(key.to_string()))?;
        Ok(network.profile())
    }
}

impl NetworkProfile {
    /// Explorer URL for an account page on this network.
    pub fn account_url(&self, address: &str) -> String {
        format!("{}/accounts/{}", self.explorer_url, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_keys() {
        assert_eq!(Network::resolve("devnet").unwrap().chain_id, "D");
        assert_eq!(Network::resolve("testnet").unwrap().chain_id, "T");
        assert_eq!(Network::resolve("mainnet").unwrap().chain_id, "1");
    }

    #[test]
    fn test_resolve_unknown_key() {
        assert_eq!(
            Network::resolve("localnet"),
            Err(Error::UnknownNetwork("localnet".to_string()))
        );
    }

    #[test]
    fn test_profiles_are_distinct() {
        let profiles = [
            Network::Devnet.profile(),
            Network::Testnet.profile(),
            Network::Mainnet.profile(),
        ];
        for (i, a) in profiles.iter().enumerate() {
            for b in profiles.iter().skip(i + 1) {
                assert_ne!(a.api_url, b.api_url);
                assert_ne!(a.gateway_url, b.gateway_url);
                assert_ne!(a.explorer_url, b.explorer_url);
                assert_ne!(a.chain_id, b.chain_id);
            }
        }
    }

    #[test]
    fn test_account_url() {
        let profile = Network::Testnet.profile();
        assert_eq!(
            profile.account_url("erd1abc"),
            "https://testnet-explorer.multiversx.com/accounts/erd1abc"
        );
    }

    #[test]
    fn test_key_round_trip() {
        for key in ["devnet", "testnet", "mainnet"] {
            let network: Network = key.parse().unwrap();
            assert_eq!(network.to_string(), key);
        }
    }
}
