//! Contract compilation seam.

use std::future::Future;

use anyhow::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A compiled contract binary plus its content digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledArtifact {
    /// The WASM binary.
    pub wasm: Vec<u8>,
    /// Hex-encoded SHA-256 of the binary.
    pub sha256: String,
}

impl CompiledArtifact {
    /// Wrap a WASM binary, computing its digest.
    pub fn new(wasm: Vec<u8>) -> Self {
        let sha256 = hex::encode(Sha256::digest(&wasm));
        Self { wasm, sha256 }
    }
}

/// Compiles contract source into a deployable artifact.
pub trait ArtifactCompiler: Send + Sync {
    fn compile(&self, source: &str) -> impl Future<Output = Result<CompiledArtifact>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_digest_is_stable() {
        let a = CompiledArtifact::new(vec![0x00, 0x61, 0x73, 0x6d]);
        let b = CompiledArtifact::new(vec![0x00, 0x61, 0x73, 0x6d]);
        assert_eq!(a.sha256, b.sha256);
        assert_eq!(a.sha256.len(), 64);

        let other = CompiledArtifact::new(vec![0x01]);
        assert_ne!(a.sha256, other.sha256);
    }
}
