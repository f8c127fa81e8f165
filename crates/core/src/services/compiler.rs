//! Contract compilers.

use anyhow::{Context, Result};
use tempdir::TempDir;
use tokio::process::Command;

use crate::traits::{ArtifactCompiler, CompiledArtifact};

/// Manifest written into the sandbox build project.
const SANDBOX_MANIFEST: &str = r#"[package]
name = "multiversx-contract"
version = "0.1.0"
edition = "2021"

[lib]
path = "src/lib.rs"

[dependencies]
multiversx-sc = "0.43.4"

[dev-dependencies]
multiversx-sc-scenario = "0.43.4"
"#;

/// The WASM module magic prefix.
const WASM_MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6d];

/// Compiles contracts with the MultiversX toolchain in a throwaway project.
///
/// The source is written to a fresh temporary cargo project and built with
/// `<tool> contract build`; the project is removed when the build finishes.
/// Requires `mxpy` and the Rust WASM target on the host.
#[derive(Debug, Clone)]
pub struct SandboxCompiler {
    /// Build tool to invoke, `mxpy` by default.
    pub tool: String,
}

impl Default for SandboxCompiler {
    fn default() -> Self {
        Self {
            tool: "mxpy".to_string(),
        }
    }
}

impl ArtifactCompiler for SandboxCompiler {
    async fn compile(&self, source: &str) -> Result<CompiledArtifact> {
        let workdir =
            TempDir::new("mxcraft-contract").context("Failed to create build directory")?;
        let project = workdir.path();

        std::fs::create_dir_all(project.join("src"))
            .context("Failed to create project layout")?;
        std::fs::write(project.join("Cargo.toml"), SANDBOX_MANIFEST)
            .context("Failed to write project manifest")?;
        std::fs::write(project.join("src").join("lib.rs"), source)
            .context("Failed to write contract source")?;

        tracing::info!(
            project = %project.display(),
            tool = %self.tool,
            "Building contract..."
        );

        let output = Command::new(&self.tool)
            .args(["contract", "build"])
            .current_dir(project)
            .output()
            .await
            .with_context(|| format!("Failed to run `{} contract build`", self.tool))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("build failed: {}", stderr.trim());
        }

        let wasm_path = project.join("output").join("multiversx-contract.wasm");
        let wasm = std::fs::read(&wasm_path).with_context(|| {
            format!("Failed to read compiled WASM from {}", wasm_path.display())
        })?;

        let artifact = CompiledArtifact::new(wasm);
        tracing::info!(sha256 = %artifact.sha256, size_bytes = artifact.wasm.len(), "Contract built");
        Ok(artifact)
    }
}

/// Development compiler: validates the source and emits a placeholder
/// artifact carrying only the WASM magic, without invoking a toolchain.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevCompiler;

impl ArtifactCompiler for DevCompiler {
    async fn compile(&self, source: &str) -> Result<CompiledArtifact> {
        if source.trim().is_empty() {
            anyhow::bail!("no contract source to compile");
        }
        tracing::debug!(
            source_len = source.len(),
            "Skipping toolchain build, emitting placeholder artifact"
        );
        Ok(CompiledArtifact::new(WASM_MAGIC.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dev_compiler_emits_wasm_magic() {
        let artifact = DevCompiler.compile("pub trait T {}").await.unwrap();
        assert_eq!(artifact.wasm, WASM_MAGIC);
        assert_eq!(artifact.sha256.len(), 64);
    }

    #[tokio::test]
    async fn test_dev_compiler_rejects_empty_source() {
        assert!(DevCompiler.compile("  \n ").await.is_err());
    }
}
